//! Lua tokenizer built from the combinators in this crate.
//!
//! [`Lexer::tokenize`] turns source text into a token stream that always ends
//! with [`TokenKind::EndOfStream`]. Every token carries the byte span it was
//! read from, so `&source[span.start..span.end]` is its exact spelling.

pub mod config;
pub mod number;
pub(crate) mod rules;
pub(crate) mod string;
pub mod token;

pub use config::LexerConfig;
pub use number::Number;
pub use token::{Keyword, Symbol, Token, TokenKind};

use crate::cursors::StrCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::{debug, trace};

/// Tokenizer for one lexical configuration
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        Lexer { config }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Split `source` into tokens
    ///
    /// Whitespace is dropped, and so are comments unless the configuration
    /// asks for them. Fails on the first lexeme that cannot be read; the
    /// error position is a byte offset into `source`.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, ParseError> {
        trace!(bytes = source.len(), "tokenizing");

        match rules::tokens(&self.config).parse(StrCursor::new(source)) {
            Ok((tokens, _)) => {
                debug!(tokens = tokens.len(), "tokenized source");
                Ok(tokens)
            }
            Err(error) => {
                debug!(position = error.position, %error, "tokenization failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::position::Span;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::default()
            .tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn name(text: &str) -> TokenKind {
        TokenKind::Identifier(text.to_string())
    }

    #[test]
    fn test_empty_source() {
        let tokens = Lexer::default().tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::EndOfStream, Span::new(0, 0))]);

        let tokens = Lexer::default().tokenize("  -- only a comment\n").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(20, 20));
    }

    #[test]
    fn test_statement() {
        assert_eq!(
            kinds("local x = a.b .. \"s\" -- done"),
            vec![
                TokenKind::Keyword(Keyword::Local),
                name("x"),
                TokenKind::Symbol(Symbol::Assign),
                name("a"),
                TokenKind::Symbol(Symbol::Dot),
                name("b"),
                TokenKind::Symbol(Symbol::Concat),
                TokenKind::String("s".into()),
                TokenKind::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_elseif_is_one_keyword() {
        assert_eq!(
            kinds("elseif"),
            vec![TokenKind::Keyword(Keyword::Elseif), TokenKind::EndOfStream]
        );
        assert_eq!(kinds("endx"), vec![name("endx"), TokenKind::EndOfStream]);
    }

    #[test]
    fn test_adjacent_tokens_without_whitespace() {
        assert_eq!(
            kinds("f(1,2)[3]"),
            vec![
                name("f"),
                TokenKind::Symbol(Symbol::LeftParen),
                TokenKind::Number("1".into()),
                TokenKind::Symbol(Symbol::Comma),
                TokenKind::Number("2".into()),
                TokenKind::Symbol(Symbol::RightParen),
                TokenKind::Symbol(Symbol::LeftBracket),
                TokenKind::Number("3".into()),
                TokenKind::Symbol(Symbol::RightBracket),
                TokenKind::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped_or_emitted() {
        let source = "a --[[ long\ncomment ]] b -- line";
        assert_eq!(kinds(source), vec![name("a"), name("b"), TokenKind::EndOfStream]);

        let lexer = Lexer::new(LexerConfig::default().with_comments(true));
        let tokens: Vec<TokenKind> = lexer
            .tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect();
        assert_eq!(
            tokens,
            vec![
                name("a"),
                TokenKind::Comment(" long\ncomment ".into()),
                name("b"),
                TokenKind::Comment(" line".into()),
                TokenKind::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_minus_versus_comment() {
        assert_eq!(
            kinds("a - -b--c"),
            vec![
                name("a"),
                TokenKind::Symbol(Symbol::Minus),
                TokenKind::Symbol(Symbol::Minus),
                name("b"),
                TokenKind::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let error = Lexer::default().tokenize("x = \"abc\ny").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("string"));
        assert_eq!(error.position, 8);
    }

    #[test]
    fn test_unterminated_long_comment() {
        let error = Lexer::default().tokenize("x --[==[ never").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("long comment"));
        assert_eq!(error.position, 14);
    }

    #[test]
    fn test_number_overflow_fails_lexing() {
        let error = Lexer::default()
            .tokenize("x = 0x10000000000000000")
            .unwrap_err();
        assert!(matches!(error.kind, ErrorKind::NumberConversion { .. }));
    }

    #[test]
    fn test_unrecognized_character() {
        let error = Lexer::default().tokenize("a = b @ c").unwrap_err();
        assert!(matches!(error.kind, ErrorKind::UnrecognizedToken { .. }));
        assert_eq!(error.position, 6);
    }

    #[test]
    fn test_profiles_differ() {
        let source = "a // b";

        let lua53 = kinds(source);
        assert_eq!(lua53[1], TokenKind::Symbol(Symbol::DoubleSlash));

        // Lua 5.1 has no floor division; "//" reads as two slashes
        let lua51 = Lexer::new(LexerConfig::lua51()).tokenize(source).unwrap();
        assert_eq!(lua51[1].kind, TokenKind::Symbol(Symbol::Slash));
        assert_eq!(lua51[2].kind, TokenKind::Symbol(Symbol::Slash));

        // ... and "goto" is an ordinary name
        let lua51 = Lexer::new(LexerConfig::lua51()).tokenize("goto").unwrap();
        assert_eq!(lua51[0].kind, name("goto"));
        assert_eq!(kinds("goto")[0], TokenKind::Keyword(Keyword::Goto));
    }

    #[test]
    fn test_spans_round_trip() {
        let source = "local t = {1, 2.5, 0xff} if t[1] >= 2 then print(t .. 'x', ...) end";
        let lexer = Lexer::default();
        let tokens = lexer.tokenize(source).unwrap();

        // Re-emit each token's spelling separated by single spaces and lex again
        let spellings: Vec<&str> = tokens
            .iter()
            .map(|token| token.span.slice(source).unwrap())
            .collect();
        let rebuilt = spellings.join(" ");
        let again = lexer.tokenize(&rebuilt).unwrap();

        let strip = |tokens: Vec<Token>| -> Vec<TokenKind> {
            tokens.into_iter().map(|token| token.kind).collect()
        };
        assert_eq!(strip(tokens), strip(again));
    }

    #[test]
    fn test_span_covers_spelling() {
        let source = "x = [[long]] .. 'q'";
        let tokens = Lexer::default().tokenize(source).unwrap();
        let spellings: Vec<&str> = tokens
            .iter()
            .map(|token| token.span.slice(source).unwrap())
            .collect();
        assert_eq!(spellings, vec!["x", "=", "[[long]]", "..", "'q'", ""]);
    }
}
