use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Ordered choice between two parsers
///
/// Both alternatives start from the same cursor. When both fail, the failure
/// that got further into the input is reported. When only the first fails,
/// its failure goes to the cursor.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(first) => match self.parser2.parse(cursor) {
                Ok(result) => {
                    cursor.record_failure(&first);
                    Ok(result)
                }
                Err(second) => Err(first.furthest(second)),
            },
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over a list of alternatives of the same type
///
/// The first alternative that succeeds wins. Combine with boxed parsers to
/// mix differently composed alternatives.
pub struct OneOf<P> {
    alternatives: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        OneOf { alternatives }
    }
}

impl<'code, P> Parser<'code> for OneOf<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut failure: Option<ParseError> = None;

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(result) => {
                    if let Some(error) = &failure {
                        cursor.record_failure(error);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    failure = Some(match failure {
                        Some(previous) => previous.furthest(error),
                        None => error,
                    });
                }
            }
        }

        Err(failure
            .unwrap_or_else(|| ParseError::custom("no alternatives to try", cursor.position())))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, P>(alternatives: Vec<P>) -> OneOf<P>
where
    P: Parser<'code>,
{
    OneOf::new(alternatives)
}
