use crate::lexer::{Keyword, Symbol, Token, TokenKind};

/// How a run of same-layer binary operators groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
    Equal,
    BitOr,
    BitXor,
    BitAnd,
    ShiftLeft,
    ShiftRight,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

impl BinaryOp {
    /// The token that spells this operator
    pub fn token(self) -> TokenKind {
        match self {
            BinaryOp::Or => TokenKind::Keyword(Keyword::Or),
            BinaryOp::And => TokenKind::Keyword(Keyword::And),
            BinaryOp::Less => TokenKind::Symbol(Symbol::Less),
            BinaryOp::Greater => TokenKind::Symbol(Symbol::Greater),
            BinaryOp::LessEqual => TokenKind::Symbol(Symbol::LessEqual),
            BinaryOp::GreaterEqual => TokenKind::Symbol(Symbol::GreaterEqual),
            BinaryOp::NotEqual => TokenKind::Symbol(Symbol::NotEqual),
            BinaryOp::Equal => TokenKind::Symbol(Symbol::Equal),
            BinaryOp::BitOr => TokenKind::Symbol(Symbol::Pipe),
            BinaryOp::BitXor => TokenKind::Symbol(Symbol::Tilde),
            BinaryOp::BitAnd => TokenKind::Symbol(Symbol::Ampersand),
            BinaryOp::ShiftLeft => TokenKind::Symbol(Symbol::ShiftLeft),
            BinaryOp::ShiftRight => TokenKind::Symbol(Symbol::ShiftRight),
            BinaryOp::Concat => TokenKind::Symbol(Symbol::Concat),
            BinaryOp::Add => TokenKind::Symbol(Symbol::Plus),
            BinaryOp::Sub => TokenKind::Symbol(Symbol::Minus),
            BinaryOp::Mul => TokenKind::Symbol(Symbol::Star),
            BinaryOp::Div => TokenKind::Symbol(Symbol::Slash),
            BinaryOp::FloorDiv => TokenKind::Symbol(Symbol::DoubleSlash),
            BinaryOp::Mod => TokenKind::Symbol(Symbol::Percent),
            BinaryOp::Pow => TokenKind::Symbol(Symbol::Caret),
        }
    }

    pub fn matches(self, token: &Token) -> bool {
        token.kind == self.token()
    }

    pub fn as_str(self) -> &'static str {
        spelling(&self.token())
    }

    /// Spelled as a word (`and`, `or`) rather than punctuation
    pub fn is_word(self) -> bool {
        matches!(self.token(), TokenKind::Keyword(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Length,
    Negate,
    BitNot,
}

impl UnaryOp {
    pub fn token(self) -> TokenKind {
        match self {
            UnaryOp::Not => TokenKind::Keyword(Keyword::Not),
            UnaryOp::Length => TokenKind::Symbol(Symbol::Hash),
            UnaryOp::Negate => TokenKind::Symbol(Symbol::Minus),
            UnaryOp::BitNot => TokenKind::Symbol(Symbol::Tilde),
        }
    }

    pub fn matches(self, token: &Token) -> bool {
        token.kind == self.token()
    }

    pub fn as_str(self) -> &'static str {
        spelling(&self.token())
    }

    pub fn is_word(self) -> bool {
        matches!(self.token(), TokenKind::Keyword(_))
    }
}

fn spelling(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword(keyword) => keyword.as_str(),
        TokenKind::Symbol(symbol) => symbol.as_str(),
        _ => "",
    }
}

/// One precedence level: the binary operators that combine at it and the
/// unary operators that prefix an operand at it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    binary: Vec<(BinaryOp, Assoc)>,
    unary: Vec<UnaryOp>,
}

impl Layer {
    pub fn new() -> Self {
        Layer::default()
    }

    pub fn binary(mut self, assoc: Assoc, operators: &[BinaryOp]) -> Self {
        self.binary
            .extend(operators.iter().map(|&operator| (operator, assoc)));
        self
    }

    pub fn unary(mut self, operators: &[UnaryOp]) -> Self {
        self.unary.extend_from_slice(operators);
        self
    }

    pub fn binary_operators(&self) -> &[(BinaryOp, Assoc)] {
        &self.binary
    }

    pub fn unary_operators(&self) -> &[UnaryOp] {
        &self.unary
    }
}

/// Precedence layers ordered tightest binding first
///
/// Layer `i` of the table is parsed at grammar level `i + 1`; level 0 is
/// the operand.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    layers: Vec<Layer>,
}

impl OperatorTable {
    pub fn new(layers: Vec<Layer>) -> Self {
        OperatorTable { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layer index a binary operator lives at, if any
    pub fn binary_layer(&self, operator: BinaryOp) -> Option<usize> {
        self.layers.iter().position(|layer| {
            layer
                .binary
                .iter()
                .any(|&(candidate, _)| candidate == operator)
        })
    }

    pub fn lua53() -> Self {
        use BinaryOp::*;

        OperatorTable::new(vec![
            Layer::new().binary(Assoc::Right, &[Pow]),
            Layer::new().unary(&[UnaryOp::Not, UnaryOp::Length, UnaryOp::Negate, UnaryOp::BitNot]),
            Layer::new().binary(Assoc::Left, &[Mul, Div, FloorDiv, Mod]),
            Layer::new().binary(Assoc::Left, &[Add, Sub]),
            Layer::new().binary(Assoc::Right, &[Concat]),
            Layer::new().binary(Assoc::Left, &[ShiftLeft, ShiftRight]),
            Layer::new().binary(Assoc::Left, &[BitAnd]),
            Layer::new().binary(Assoc::Left, &[BitXor]),
            Layer::new().binary(Assoc::Left, &[BitOr]),
            Layer::new().binary(
                Assoc::Left,
                &[Less, Greater, LessEqual, GreaterEqual, NotEqual, Equal],
            ),
            Layer::new().binary(Assoc::Left, &[And]),
            Layer::new().binary(Assoc::Left, &[Or]),
        ])
    }

    pub fn lua51() -> Self {
        use BinaryOp::*;

        OperatorTable::new(vec![
            Layer::new().binary(Assoc::Right, &[Pow]),
            Layer::new().unary(&[UnaryOp::Not, UnaryOp::Length, UnaryOp::Negate]),
            Layer::new().binary(Assoc::Left, &[Mul, Div, Mod]),
            Layer::new().binary(Assoc::Left, &[Add, Sub]),
            Layer::new().binary(Assoc::Right, &[Concat]),
            Layer::new().binary(
                Assoc::Left,
                &[Less, Greater, LessEqual, GreaterEqual, NotEqual, Equal],
            ),
            Layer::new().binary(Assoc::Left, &[And]),
            Layer::new().binary(Assoc::Left, &[Or]),
        ])
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        OperatorTable::lua53()
    }
}
