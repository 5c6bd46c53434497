use crate::position::Span;
use std::fmt;

/// Reserved words of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

impl Keyword {
    pub const ALL: [Keyword; 22] = [
        Keyword::And,
        Keyword::Break,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elseif,
        Keyword::End,
        Keyword::False,
        Keyword::For,
        Keyword::Function,
        Keyword::Goto,
        Keyword::If,
        Keyword::In,
        Keyword::Local,
        Keyword::Nil,
        Keyword::Not,
        Keyword::Or,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::Then,
        Keyword::True,
        Keyword::Until,
        Keyword::While,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Break => "break",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::End => "end",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Local => "local",
            Keyword::Nil => "nil",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::Then => "then",
            Keyword::True => "true",
            Keyword::Until => "until",
            Keyword::While => "while",
        }
    }
}

/// Punctuation and operator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    Caret,
    Hash,
    Ampersand,
    Tilde,
    Pipe,
    ShiftLeft,
    ShiftRight,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    Assign,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    DoubleColon,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Concat,
    Ellipsis,
}

impl Symbol {
    pub const ALL: [Symbol; 33] = [
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Star,
        Symbol::Slash,
        Symbol::DoubleSlash,
        Symbol::Percent,
        Symbol::Caret,
        Symbol::Hash,
        Symbol::Ampersand,
        Symbol::Tilde,
        Symbol::Pipe,
        Symbol::ShiftLeft,
        Symbol::ShiftRight,
        Symbol::Equal,
        Symbol::NotEqual,
        Symbol::LessEqual,
        Symbol::GreaterEqual,
        Symbol::Less,
        Symbol::Greater,
        Symbol::Assign,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::DoubleColon,
        Symbol::Semicolon,
        Symbol::Colon,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::Concat,
        Symbol::Ellipsis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::DoubleSlash => "//",
            Symbol::Percent => "%",
            Symbol::Caret => "^",
            Symbol::Hash => "#",
            Symbol::Ampersand => "&",
            Symbol::Tilde => "~",
            Symbol::Pipe => "|",
            Symbol::ShiftLeft => "<<",
            Symbol::ShiftRight => ">>",
            Symbol::Equal => "==",
            Symbol::NotEqual => "~=",
            Symbol::LessEqual => "<=",
            Symbol::GreaterEqual => ">=",
            Symbol::Less => "<",
            Symbol::Greater => ">",
            Symbol::Assign => "=",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::DoubleColon => "::",
            Symbol::Semicolon => ";",
            Symbol::Colon => ":",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::Concat => "..",
            Symbol::Ellipsis => "...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier(String),
    /// Decoded contents of a short or long string
    String(String),
    /// Raw numeral text; its value has already been checked to convert
    Number(String),
    Symbol(Symbol),
    /// Comment body without the `--` marker, only produced when comments are emitted
    Comment(String),
    EndOfStream,
}

/// A lexeme and the byte range of source it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Keyword(keyword) => f.write_str(keyword.as_str()),
            TokenKind::Identifier(name) => f.write_str(name),
            TokenKind::String(text) => write!(f, "{:?}", text),
            TokenKind::Number(raw) => f.write_str(raw),
            TokenKind::Symbol(symbol) => f.write_str(symbol.as_str()),
            TokenKind::Comment(_) => f.write_str("comment"),
            TokenKind::EndOfStream => f.write_str("<eof>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_are_unique() {
        let mut keywords: Vec<_> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        keywords.sort();
        keywords.dedup();
        assert_eq!(keywords.len(), Keyword::ALL.len());

        let mut symbols: Vec<_> = Symbol::ALL.iter().map(|s| s.as_str()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), Symbol::ALL.len());
    }

    #[test]
    fn test_token_display() {
        let span = Span::new(0, 1);
        assert_eq!(Token::new(TokenKind::Keyword(Keyword::Elseif), span).to_string(), "elseif");
        assert_eq!(Token::new(TokenKind::Symbol(Symbol::Ellipsis), span).to_string(), "...");
        assert_eq!(Token::new(TokenKind::String("a\n".into()), span).to_string(), "\"a\\n\"");
        assert_eq!(Token::new(TokenKind::EndOfStream, span).to_string(), "<eof>");
    }

    #[test]
    fn test_token_predicates() {
        let token = Token::new(TokenKind::Symbol(Symbol::Dot), Span::new(3, 4));
        assert!(token.is_symbol(Symbol::Dot));
        assert!(!token.is_symbol(Symbol::Concat));
        assert!(!token.is_keyword(Keyword::And));
    }
}
