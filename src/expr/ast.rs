use super::operator::{BinaryOp, UnaryOp};
use crate::lexer::Number;
use std::fmt;

/// Expression tree; every node owns its children
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Nil,
    True,
    False,
    Vararg,
    Number(Number),
    String(String),
    Name(String),
    Field {
        object: Box<Expr>,
        name: String,
    },
    Index {
        object: Box<Expr>,
        key: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MethodCall {
        object: Box<Expr>,
        name: String,
        args: Vec<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn integer(value: i64) -> Self {
        Expr::Number(Number::Integer(value))
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn field(object: Expr, name: impl Into<String>) -> Self {
        Expr::Field {
            object: Box::new(object),
            name: name.into(),
        }
    }

    pub fn index(object: Expr, key: Expr) -> Self {
        Expr::Index {
            object: Box::new(object),
            key: Box::new(key),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn method_call(object: Expr, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::MethodCall {
            object: Box::new(object),
            name: name.into(),
            args,
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_str(")")
}

/// Fully parenthesized rendering: every operator application gets its own
/// parentheses, so grouping is explicit.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nil => f.write_str("nil"),
            Expr::True => f.write_str("true"),
            Expr::False => f.write_str("false"),
            Expr::Vararg => f.write_str("..."),
            Expr::Number(number) => write!(f, "{}", number),
            Expr::String(text) => write!(f, "{:?}", text),
            Expr::Name(name) => f.write_str(name),
            Expr::Field { object, name } => write!(f, "{}.{}", object, name),
            Expr::Index { object, key } => write!(f, "{}[{}]", object, key),
            Expr::Call { callee, args } => {
                write!(f, "{}", callee)?;
                write_args(f, args)
            }
            Expr::MethodCall { object, name, args } => {
                write!(f, "{}:{}", object, name)?;
                write_args(f, args)
            }
            Expr::Binary { op, lhs, rhs } if op.is_word() => {
                write!(f, "({} {} {})", lhs, op.as_str(), rhs)
            }
            Expr::Binary { op, lhs, rhs } => write!(f, "({}{}{})", lhs, op.as_str(), rhs),
            Expr::Unary { op, operand } if op.is_word() => {
                write!(f, "({} {})", op.as_str(), operand)
            }
            Expr::Unary { op, operand } => write!(f, "({}{})", op.as_str(), operand),
        }
    }
}
