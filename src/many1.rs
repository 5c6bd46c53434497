use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            let before = cursor.position();
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                    if cursor.position() == before {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
