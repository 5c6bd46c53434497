use crate::cursor::{Cursor, SourceCursor};
use crate::error::ParseError;
use std::fmt;

/// Random-access cursor over a slice of elements, e.g. a token stream
#[derive(Debug)]
pub enum SliceCursor<'code, T> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

// Derives would demand `T: Copy`; the cursor only holds a reference.
impl<'code, T> Clone for SliceCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T> Copy for SliceCursor<'code, T> {}

impl<'code, T> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfFile { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// The elements not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        match *self {
            SliceCursor::Valid { data, position } => &data[position..],
            SliceCursor::EndOfFile { .. } => &[],
        }
    }
}

impl<'code, T: fmt::Display> Cursor<'code> for SliceCursor<'code, T> {
    type Element = &'code T;

    fn peek(&self) -> Result<Self::Element, ParseError> {
        match *self {
            SliceCursor::Valid { data, position } => Ok(&data[position]),
            SliceCursor::EndOfFile { data } => Err(ParseError::end_of_input(data.len())),
        }
    }

    fn next(self) -> Self {
        match self {
            SliceCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    SliceCursor::EndOfFile { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            SliceCursor::EndOfFile { data } => SliceCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfFile { data } => data.len(),
        }
    }
}

impl<'code, T: fmt::Display> SourceCursor<'code> for SliceCursor<'code, T> {
    type Slice = [T];

    fn source(&self) -> &'code [T] {
        match *self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::EndOfFile { data } => data,
        }
    }

    fn consumed_since(&self, earlier: &Self) -> &'code [T] {
        let start = earlier.position().min(self.position());
        &self.source()[start..self.position()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = [1u32, 2, 3, 4, 5];
        let cursor = SliceCursor::new(&data);

        assert_eq!(*cursor.peek().unwrap(), 1);

        let cursor = cursor.next();
        assert_eq!(*cursor.peek().unwrap(), 2);

        let cursor = cursor.next();
        assert_eq!(*cursor.peek().unwrap(), 3);
    }

    #[test]
    fn test_eof() {
        let data = [10u32, 20];
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(*cursor.peek().unwrap(), 10);
        cursor = cursor.next();
        assert_eq!(*cursor.peek().unwrap(), 20);

        cursor = cursor.next();
        assert!(matches!(cursor, SliceCursor::EndOfFile { .. }));
        assert!(cursor.eos());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let cursor = SliceCursor::new(&data);

        assert!(matches!(cursor, SliceCursor::EndOfFile { .. }));
        assert!(cursor.peek().unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_advance_at_end_fails() {
        let data = [42u32];
        let cursor = SliceCursor::new(&data);

        let (value, cursor) = cursor.advance().unwrap();
        assert_eq!(*value, 42);

        let error = cursor.advance().unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(error.position, 1);
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = SliceCursor::new(&data);

        let saved_at_5 = cursor;
        let cursor = cursor.next();
        assert_eq!(*cursor.peek().unwrap(), 10);
        assert_eq!(*saved_at_5.peek().unwrap(), 5);

        let saved_at_10 = cursor;
        let cursor = cursor.next();
        assert_eq!(*cursor.peek().unwrap(), 15);
        assert_eq!(*saved_at_10.peek().unwrap(), 10);

        let from_5 = saved_at_5.next();
        assert_eq!(*from_5.peek().unwrap(), 10);
    }

    #[test]
    fn test_consumed_since() {
        let data = [1u32, 2, 3, 4];
        let start = SliceCursor::new(&data);
        let end = start.next().next().next();

        assert_eq!(end.consumed_since(&start), &[1, 2, 3]);
        assert_eq!(start.consumed_since(&end), &[] as &[u32]);
        assert_eq!(end.next().consumed_since(&start), &[1, 2, 3, 4]);
        assert_eq!(end.remaining(), &[4]);
    }
}
