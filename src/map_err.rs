use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::fmt;

/// Rewrites the failure of a parser, e.g. to relabel it or move its position
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::error::ErrorKind;
    use crate::literal::literal;

    #[test]
    fn test_map_err_transforms_error_on_failure() {
        let cursor = StrCursor::new("test");
        let parser = literal("x")
            .map_err(|e| ParseError::new(ErrorKind::Unterminated("block"), e.position));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unterminated("block"));
    }

    #[test]
    fn test_map_err_preserves_success() {
        let cursor = StrCursor::new("test");
        let parser = map_err(literal("te"), |_| ParseError::custom("should not be called", 0));

        let (output, _) = parser.parse(cursor).unwrap();
        assert_eq!(output, "te");
    }

    #[test]
    fn test_map_err_chain_sees_original() {
        let cursor = StrCursor::new("test");
        let parser = literal("x")
            .map_err(|e| ParseError::custom(format!("wrapped: {}", e.kind), e.position))
            .map_err(|e| e.relocate(|p| p + 100));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position, 100);
        assert!(error.kind.to_string().starts_with("wrapped: expected 'x'"));
    }
}
