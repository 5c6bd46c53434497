use crate::error::ParseResult;
use crate::parser::Parser;

/// Delimited content, such as a parenthesized expression or `[key]` index
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Does not skip any separators around the content.
///
/// # Examples
/// - `"[k]"` yields the output of the content parser for `k`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    Between {
        open,
        content,
        close,
    }
}
