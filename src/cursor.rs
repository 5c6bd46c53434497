use crate::error::ParseError;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable position in a sequence of elements. Advancing
/// produces a new cursor and leaves the old one untouched, so a cursor can be
/// kept as a snapshot and resumed from later. This abstraction allows parsers
/// to work with different underlying data (text, tokens, a buffered
/// iterator) while sharing the same combinator interface.
pub trait Cursor<'code>: Copy {
    /// The type of elements this cursor yields
    type Element: Copy + fmt::Display;

    /// Get the element at the current cursor position without advancing
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn peek(&self) -> Result<Self::Element, ParseError>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Read the current element and step past it
    ///
    /// Unlike `next()`, this returns an error when already at the end
    fn advance(self) -> Result<(Self::Element, Self), ParseError> {
        let element = self.peek()?;
        Ok((element, self.next()))
    }

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.peek().is_err()
    }

    /// Describe the current element for error messages
    fn describe(&self) -> String {
        match self.peek() {
            Ok(element) => format!("'{}'", element),
            Err(_) => "end of input".to_string(),
        }
    }

    /// Hand over a failure that a combinator recovered from
    ///
    /// Only cursors that carry a [`FailureLog`](crate::error::FailureLog)
    /// keep it.
    fn record_failure(&self, _error: &ParseError) {}

    /// The furthest failure handed over so far, if this cursor keeps them
    fn recorded_failure(&self) -> Option<ParseError> {
        None
    }
}

/// A cursor over input that is held in memory as a whole
///
/// Only these cursors can hand back the region a parser consumed, which is
/// what [`recognize`](crate::position::recognize) needs.
pub trait SourceCursor<'code>: Cursor<'code> {
    /// The underlying buffer, used to hand back matched regions
    type Slice: ?Sized + 'code;

    /// Get the whole source this cursor walks over
    fn source(&self) -> &'code Self::Slice;

    /// The elements between `earlier` and this cursor
    ///
    /// Both cursors must derive from the same origin. If `earlier` is in fact
    /// ahead of `self` the region is empty.
    fn consumed_since(&self, earlier: &Self) -> &'code Self::Slice;
}
