use super::token::{Keyword, Symbol};

/// Lexical configuration: which keywords and symbols exist and how to treat comments
///
/// Built once and handed to [`Lexer::new`](super::Lexer::new). Keywords and
/// symbols are kept sorted longest spelling first, so an ordered choice over
/// them always prefers the longest match.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerConfig {
    keywords: Vec<Keyword>,
    symbols: Vec<Symbol>,
    emit_comments: bool,
    extended_escapes: bool,
}

impl LexerConfig {
    pub fn new(keywords: Vec<Keyword>, symbols: Vec<Symbol>) -> Self {
        let mut config = LexerConfig {
            keywords,
            symbols,
            emit_comments: false,
            extended_escapes: true,
        };
        config
            .keywords
            .sort_by_key(|keyword| std::cmp::Reverse(keyword.as_str().len()));
        config
            .symbols
            .sort_by_key(|symbol| std::cmp::Reverse(symbol.as_str().len()));
        config
    }

    /// Lua 5.3 token set
    pub fn lua53() -> Self {
        LexerConfig::new(Keyword::ALL.to_vec(), Symbol::ALL.to_vec())
    }

    /// Lua 5.1 token set: no `goto`, no integer division, bitwise operators or
    /// labels, and only the decimal string escapes
    pub fn lua51() -> Self {
        let keywords = Keyword::ALL
            .into_iter()
            .filter(|keyword| *keyword != Keyword::Goto)
            .collect();
        let symbols = Symbol::ALL
            .into_iter()
            .filter(|symbol| {
                !matches!(
                    symbol,
                    Symbol::DoubleSlash
                        | Symbol::Ampersand
                        | Symbol::Tilde
                        | Symbol::Pipe
                        | Symbol::ShiftLeft
                        | Symbol::ShiftRight
                        | Symbol::DoubleColon
                )
            })
            .collect();
        LexerConfig::new(keywords, symbols).with_extended_escapes(false)
    }

    /// Keep comments in the token stream instead of skipping them
    pub fn with_comments(mut self, emit_comments: bool) -> Self {
        self.emit_comments = emit_comments;
        self
    }

    /// Accept `\x`, `\z` and `\u{...}` escapes in short strings
    pub fn with_extended_escapes(mut self, extended_escapes: bool) -> Self {
        self.extended_escapes = extended_escapes;
        self
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn emit_comments(&self) -> bool {
        self.emit_comments
    }

    pub fn extended_escapes(&self) -> bool {
        self.extended_escapes
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig::lua53()
    }
}
