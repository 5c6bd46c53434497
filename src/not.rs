use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::parser::Parser;

/// Negative lookahead
///
/// Yields `()` when the wrapped parser is rejected here and fails when it
/// would match. The cursor is returned unchanged either way, so `not(tag("--"))`
/// can guard an alternative without eating the comment opener.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::new(
                ErrorKind::Unsatisfied {
                    expected: "negative lookahead to fail".into(),
                    found: cursor.describe(),
                },
                cursor.position(),
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
