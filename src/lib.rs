//! # Lunacomb - Parser Combinator Library
//!
//! A parser combinator library with a Lua tokenizer and expression parser
//! built on top of it.
//!
//! Lunacomb provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Backtracking by value**: Cursors are `Copy`, so a failed alternative
//!   simply leaves the caller's cursor untouched
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **No left recursion**: [`left_recursive`] turns left-recursive rules
//!   into a loop, and [`lazy`] lets rules refer to themselves
//!
//! ```
//! use lunacomb::parse_expression;
//!
//! let expr = parse_expression("0-1+2*-3^4^5").unwrap();
//! assert_eq!(expr.to_string(), "((0-1)+(2*(-(3^(4^5)))))");
//! ```

pub mod all;
pub mod and;
pub mod between;
pub mod bind;
pub mod cursor;
pub mod cursors;
pub mod diagnostic;
pub mod empty;
pub mod error;
pub mod expr;
pub mod lazy;
pub mod left_fold;
pub mod lexer;
pub mod literal;
pub mod many;
pub mod many1;
pub mod map;
pub mod map_err;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod satisfy;
pub mod separated_list;

pub use all::{all, complete};
pub use and::and;
pub use between::between;
pub use bind::bind;
pub use cursor::{Cursor, SourceCursor};
pub use cursors::{SliceCursor, StrCursor, StreamBuffer, StreamCursor, Tracked};
pub use diagnostic::Diagnostic;
pub use empty::{empty, end_of_input, fail};
pub use error::{ErrorKind, FailureLog, ParseError, ParseResult};
pub use expr::{Expr, ExpressionParser, OperatorTable};
pub use lazy::lazy;
pub use left_fold::{left_fold, left_recursive};
pub use lexer::{Lexer, LexerConfig, Token, TokenKind};
pub use literal::literal;
pub use many::many;
pub use many1::many1;
pub use map::{map, try_map};
pub use map_err::map_err;
pub use not::not;
pub use optional::optional;
pub use or::{one_of, or};
pub use parser::{BoxedParser, Parser};
pub use position::{Span, position, recognize};
pub use satisfy::{any, satisfy, select};
pub use separated_list::separated_list;

/// Extension traits that add the combinator methods to every parser
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::bind::BindExt;
    pub use crate::cursor::{Cursor, SourceCursor};
    pub use crate::map::MapExt;
    pub use crate::map_err::MapErrExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::{BoxedExt, Parser};
    pub use crate::position::PositionExt;
}

/// Tokenize Lua 5.3 source with the default configuration
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::default().tokenize(source)
}

/// Parse Lua 5.3 source that holds exactly one expression
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    ExpressionParser::default().parse_str(source)
}
