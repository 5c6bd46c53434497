use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Zero or more repetitions
///
/// Never fails. Repetition stops at the first failure, or right after a
/// success that consumed nothing (which would otherwise repeat forever).
/// The failure that ended the run is handed to the cursor.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    let stalled = next_cursor.position() == cursor.position();
                    cursor = next_cursor;
                    if stalled {
                        break;
                    }
                }
                Err(error) => {
                    cursor.record_failure(&error);
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{SliceCursor, StrCursor};
    use crate::empty::empty;
    use crate::literal::literal;
    use crate::satisfy::{any, satisfy};

    #[test]
    fn test_many_zero_matches() {
        let cursor = StrCursor::new("xyz");
        let (results, cursor) = many(literal("a")).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.peek().unwrap(), 'x');
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = StrCursor::new("aaabcd");
        let (results, cursor) = many(literal("a")).parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(cursor.peek().unwrap(), 'b');
    }

    #[test]
    fn test_many_is_greedy_to_end() {
        let cursor = StrCursor::new("hello");
        let (results, cursor) = many(any()).parse(cursor).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(cursor.eos());
    }

    #[test]
    fn test_many_empty_input() {
        let cursor = StrCursor::new("");
        let (results, cursor) = many(literal("a")).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert!(cursor.eos());
    }

    #[test]
    fn test_many_stops_on_non_consuming_success() {
        let cursor = StrCursor::new("abc");
        let (results, after) = many(empty()).parse(cursor).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(after, cursor);
    }

    #[test]
    fn test_many_over_slice() {
        let data = [1u32, 3, 5, 6, 7];
        let cursor = SliceCursor::new(&data);
        let odd = satisfy(|n: &&u32| **n % 2 == 1, "odd number");

        let (results, cursor) = many(odd).parse(cursor).unwrap();
        assert_eq!(results, vec![&1u32, &3, &5]);
        assert_eq!(cursor.position(), 3);
    }
}
