use crate::cursor::Cursor;
use crate::empty::end_of_input;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Runs its parser back to back until the cursor is exhausted
///
/// Unlike [`many`](crate::many::many), a failing item is not a stopping point:
/// its error is returned, since the input cannot be covered otherwise. The
/// tokenizer drives the whole source through this.
pub struct All<P> {
    parser: P,
}

impl<P> All<P> {
    pub fn new(parser: P) -> Self {
        All { parser }
    }
}

impl<'code, P> Parser<'code> for All<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut results = Vec::new();

        while !cursor.eos() {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            if next_cursor.position() == cursor.position() {
                // A non-consuming item would repeat forever; what remains is trailing input.
                end_of_input().parse(next_cursor)?;
            }
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// # Example
/// ```
/// use lunacomb::{Parser, StrCursor, all, literal};
///
/// let parser = all(literal("a"));
/// let (items, _) = parser.parse(StrCursor::new("aaa")).unwrap();
/// assert_eq!(items.len(), 3);
/// ```
pub fn all<'code, P>(parser: P) -> All<P>
where
    P: Parser<'code>,
{
    All::new(parser)
}

/// Parser combinator that requires its parser to consume the entire input
///
/// Anything left over is reported as trailing input at the position where
/// the inner parser stopped, unless the cursor recorded a failure further
/// in: then that failure is what stopped the parse, and it is reported
/// instead. The same goes for a failure of the inner parser.
pub struct Complete<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Complete<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        self.parser
            .parse(cursor)
            .and_then(|(value, rest)| {
                let ((), rest) = end_of_input().parse(rest)?;
                Ok((value, rest))
            })
            .map_err(|error| match cursor.recorded_failure() {
                Some(deeper) if deeper.position > error.position => deeper,
                _ => error,
            })
    }
}

/// Convenience function to create a Complete parser
pub fn complete<'code, P>(parser: P) -> Complete<P>
where
    P: Parser<'code>,
{
    Complete { parser }
}
