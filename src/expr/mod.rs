//! Operator-precedence expression parsing over a token stream.
//!
//! The precedence levels come from an [`OperatorTable`]; the grammar reads
//! them from the table when it is applied, so alternate tables (such as
//! [`OperatorTable::lua51`]) need no grammar changes.

pub mod ast;
pub mod grammar;
pub mod operator;

pub use ast::Expr;
pub use grammar::{DEFAULT_MAX_DEPTH, ExpressionParser, Level, TokenCursor};
pub use operator::{Assoc, BinaryOp, Layer, OperatorTable, UnaryOp};
