use crate::and::And;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Succeeds with `None` and consumes nothing when the inner parser fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(error) => {
                cursor.record_failure(&error);
                Ok((None, cursor))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() and .then_optionally() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Sequence with a second parser that is allowed to fail
    ///
    /// Returns the first result and `Some` second result if it matched.
    fn then_optionally<P>(self, other: P) -> And<Self, Optional<P>>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, Optional::new(other))
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
