use crate::cursor::{Cursor, SourceCursor};
use crate::error::ParseError;

/// Forward cursor that decodes a `&str` one `char` at a time
///
/// Positions are byte offsets into the text, so a pair of cursors always
/// delimits a valid `&str` region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrCursor<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        StrCursor { text, offset: 0 }
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.text[self.offset..]
    }
}

impl<'code> Cursor<'code> for StrCursor<'code> {
    type Element = char;

    fn peek(&self) -> Result<char, ParseError> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| ParseError::end_of_input(self.offset))
    }

    fn next(self) -> Self {
        match self.remaining().chars().next() {
            Some(ch) => StrCursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.offset
    }
}

impl<'code> SourceCursor<'code> for StrCursor<'code> {
    type Slice = str;

    fn source(&self) -> &'code str {
        self.text
    }

    fn consumed_since(&self, earlier: &Self) -> &'code str {
        let start = earlier.offset.min(self.offset);
        &self.text[start..self.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        let cursor = StrCursor::new("ab");
        assert_eq!(cursor.peek().unwrap(), 'a');

        let cursor = cursor.next();
        assert_eq!(cursor.peek().unwrap(), 'b');
        assert_eq!(cursor.position(), 1);

        let cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.next().position(), 2);
    }

    #[test]
    fn test_multibyte_positions_are_byte_offsets() {
        let cursor = StrCursor::new("ñ中x");

        let (ch, cursor) = cursor.advance().unwrap();
        assert_eq!(ch, 'ñ');
        assert_eq!(cursor.position(), 2);

        let (ch, cursor) = cursor.advance().unwrap();
        assert_eq!(ch, '中');
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_advance_at_end() {
        let cursor = StrCursor::new("");
        let error = cursor.advance().unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(cursor.describe(), "end of input");
    }

    #[test]
    fn test_consumed_since() {
        let start = StrCursor::new("local x");
        let mut end = start;
        for _ in 0..5 {
            end = end.next();
        }

        assert_eq!(end.consumed_since(&start), "local");
        assert_eq!(start.consumed_since(&end), "");
        assert_eq!(end.remaining(), " x");
    }
}
