use crate::cursor::{Cursor, SourceCursor};
use crate::error::ParseResult;
use crate::parser::Parser;

/// Represents a span in the source with start and end positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the slice of text that this span covers, if it lies within `source`
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

/// Pairs a parser's output with the [`Span`] it consumed
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let start = cursor.position();
        let (output, next) = self.parser.parse(cursor)?;
        Ok(((output, Span::new(start, next.position())), next))
    }
}

/// A parser combinator that hands back the exact input its parser consumed
pub struct Recognize<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
    P::Cursor: SourceCursor<'code>,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, &'code <P::Cursor as SourceCursor<'code>>::Slice);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (output, next) = self.parser.parse(cursor)?;
        Ok(((output, next.consumed_since(&cursor)), next))
    }
}

/// Extension trait to add position tracking and matched-text extraction to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }

    /// Wrap this parser to also return the input it consumed
    fn recognize(self) -> Recognize<Self> {
        Recognize { parser: self }
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}

/// Convenience function to create a Recognize combinator
pub fn recognize<P>(parser: P) -> Recognize<P> {
    Recognize { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{SliceCursor, StrCursor};
    use crate::literal::literal;
    use crate::many1::many1;
    use crate::satisfy::satisfy;

    #[test]
    fn test_span_basic() {
        let span = Span::new(0, 5);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.slice("hello world"), Some("hello"));
        assert_eq!(Span::new(3, 3).slice("hello"), Some(""));
        assert_eq!(Span::new(3, 9).slice("hello"), None);
    }

    #[test]
    fn test_position_multi_char_parser() {
        let cursor = StrCursor::new("hello world");
        let parser = literal("hello").with_position();

        let ((matched, span), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, "hello");
        assert_eq!(span, Span::new(0, 5));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_position_after_multibyte() {
        let cursor = StrCursor::new("ñ=1").next();
        let ((_, span), _) = position(literal("=")).parse(cursor).unwrap();
        assert_eq!(span, Span::new(2, 3));
    }

    #[test]
    fn test_position_error_propagation() {
        let cursor = StrCursor::new("xyz");
        assert!(literal("a").with_position().parse(cursor).is_err());
    }

    #[test]
    fn test_recognize_text() {
        let cursor = StrCursor::new("abc123 rest");
        let word = many1(satisfy(|c: &char| c.is_alphanumeric(), "alphanumeric"));

        let ((chars, text), cursor) = recognize(word).parse(cursor).unwrap();
        assert_eq!(chars.len(), 6);
        assert_eq!(text, "abc123");
        assert_eq!(cursor.remaining(), " rest");
    }

    #[test]
    fn test_recognize_slice() {
        let data = [1u32, 2, 3, 9];
        let cursor = SliceCursor::new(&data);
        let small = many1(satisfy(|n: &&u32| **n < 5, "small"));

        let ((_, matched), _) = small.recognize().parse(cursor).unwrap();
        assert_eq!(matched, &[1, 2, 3]);
    }
}
