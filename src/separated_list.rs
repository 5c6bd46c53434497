use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Items with a separator between each pair, as in call argument lists
///
/// Parses zero or more items with a separator between consecutive items and
/// returns all of them. A separator must be followed by an item: a trailing
/// separator is an error. Does not handle whitespace.
///
/// # Examples
/// - `"1, 2, 3"` with separator `", "` yields three items
/// - `""` → `vec![]`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (first_value, mut cursor) = match self.parser.parse(cursor) {
            Ok(first) => first,
            Err(error) => {
                cursor.record_failure(&error);
                return Ok((Vec::new(), cursor));
            }
        };
        let mut results = vec![first_value];

        // Parse remaining elements preceded by separator
        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, after_separator)) => after_separator,
                Err(error) => {
                    cursor.record_failure(&error);
                    break;
                }
            };
            // An element is required after a separator
            let (value, next_cursor) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    SeparatedList::new(parser, separator)
}
