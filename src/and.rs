use crate::error::ParseResult;
use crate::parser::Parser;

/// Runs two parsers in sequence and pairs their outputs
///
/// Chains nest to the left: `a.and(b).and(c)` yields `((a, b), c)`.
/// [`AndExt::then`] and [`AndExt::skip`] keep just one side.
///
/// ```
/// use lunacomb::and::AndExt;
/// use lunacomb::literal::literal;
/// use lunacomb::{Parser, StrCursor};
///
/// let cursor = StrCursor::new("::name");
/// let ((colons, n), _) = literal("::")
///     .and(literal("n"))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(colons, "::");
/// assert_eq!(n, "n");
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .skip() and .then() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }

    /// Sequence with `other` but keep only this parser's output
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Skip { keep: self, skip: other }
    }

    /// Sequence with `other` but keep only its output
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Then { skip: self, keep: other }
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

/// Sequence of two parsers keeping the first output
pub struct Skip<P1, P2> {
    keep: P1,
    skip: P2,
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.keep.parse(cursor)?;
        let (_, cursor) = self.skip.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Sequence of two parsers keeping the second output
pub struct Then<P1, P2> {
    skip: P1,
    keep: P2,
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (_, cursor) = self.skip.parse(cursor)?;
        self.keep.parse(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::StrCursor;
    use crate::literal::literal;
    use crate::satisfy::satisfy;

    fn digit<'code>() -> impl Parser<'code, Cursor = StrCursor<'code>, Output = char> {
        satisfy(|c: &char| c.is_ascii_digit(), "digit")
    }

    #[test]
    fn test_and_both_succeed() {
        let cursor = StrCursor::new("A5xyz");
        let parser = literal("A").and(digit());

        let ((a, five), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, "A");
        assert_eq!(five, '5');
        assert_eq!(cursor.peek().unwrap(), 'x');
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = StrCursor::new("Bxyz");
        let parser = literal("A").and(literal("x"));
        assert_eq!(parser.parse(cursor).unwrap_err().position, 0);
    }

    #[test]
    fn test_and_second_fails() {
        let cursor = StrCursor::new("Axyz");
        let parser = literal("A").and(digit());
        assert_eq!(parser.parse(cursor).unwrap_err().position, 1);
    }

    #[test]
    fn test_and_chain() {
        let cursor = StrCursor::new("A5B");
        let parser = literal("A").and(digit()).and(literal("B"));

        let (((a, five), b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, "A");
        assert_eq!(five, '5');
        assert_eq!(b, "B");
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_function_syntax() {
        let cursor = StrCursor::new("XY");
        let ((x, y), _) = and(literal("X"), literal("Y")).parse(cursor).unwrap();
        assert_eq!(x, "X");
        assert_eq!(y, "Y");
    }

    #[test]
    fn test_skip_and_then() {
        let cursor = StrCursor::new("[7]");
        let parser = literal("[").then(digit()).skip(literal("]"));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, '7');
        assert!(cursor.eos());
    }
}
