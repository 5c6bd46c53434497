use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to either a value and the
/// advanced cursor, or a failure. Failures never leak a partially advanced
/// cursor: the caller still holds the cursor it passed in and resumes from it.
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser, so that differently composed parsers with the same
/// cursor and output can share a list
pub type BoxedParser<'p, 'code, C, O> = Box<dyn Parser<'code, Cursor = C, Output = O> + 'p>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Cursor, Self::Output>
    where
        Self: 'p,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::satisfy::any;

    #[test]
    fn test_boxed_parsers_share_a_list() {
        let parsers: Vec<BoxedParser<'_, '_, StrCursor<'_>, char>> = vec![
            any().boxed(),
            literal("xy")
                .map(|matched| matched.chars().next().unwrap_or_default())
                .boxed(),
        ];

        let cursor = StrCursor::new("xyz");
        for parser in &parsers {
            let (ch, _) = parser.parse(cursor).unwrap();
            assert_eq!(ch, 'x');
        }
    }

    #[test]
    fn test_reference_is_a_parser() {
        let parser = literal("ab");
        let by_ref = &parser;

        let (matched, cursor) = by_ref.parse(StrCursor::new("abc")).unwrap();
        assert_eq!(matched, "ab");
        assert_eq!(cursor.position(), 2);
    }
}
