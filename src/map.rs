use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::parser::Parser;

/// Rewrites a successful output; failures pass through untouched
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator whose mapping function may reject the parsed value
///
/// A rejection is reported at the position where the inner parser started.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<'code, P, F, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, ErrorKind>,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, next) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, next)),
            Err(kind) => Err(ParseError::new(kind, cursor.position())),
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, ErrorKind>,
{
    TryMap { parser, mapper }
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, ErrorKind>,
    {
        TryMap {
            parser: self,
            mapper,
        }
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
