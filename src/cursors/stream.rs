use crate::cursor::Cursor;
use crate::error::ParseError;
use std::cell::RefCell;
use std::fmt;
use std::iter::Fuse;

/// Elements pulled from a forward-only iterator so far
///
/// The iterator only advances as far as some cursor has looked, and every
/// element it yielded is kept so cursors can back up to it.
pub struct StreamBuffer<I: Iterator> {
    source: RefCell<Fuse<I>>,
    seen: RefCell<Vec<I::Item>>,
}

impl<I: Iterator> StreamBuffer<I> {
    pub fn new(source: I) -> Self {
        StreamBuffer {
            source: RefCell::new(source.fuse()),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// A cursor at the first element
    pub fn cursor(&self) -> StreamCursor<'_, I> {
        StreamCursor {
            buffer: self,
            position: 0,
        }
    }

    /// How many elements have been taken from the iterator
    pub fn pulled(&self) -> usize {
        self.seen.borrow().len()
    }

    fn get(&self, index: usize) -> Option<I::Item>
    where
        I::Item: Copy,
    {
        let mut seen = self.seen.borrow_mut();
        while seen.len() <= index {
            let item = self.source.borrow_mut().next()?;
            seen.push(item);
        }
        seen.get(index).copied()
    }
}

impl<I: Iterator> fmt::Debug for StreamBuffer<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBuffer")
            .field("pulled", &self.pulled())
            .finish()
    }
}

/// Cursor over a [`StreamBuffer`]
pub struct StreamCursor<'code, I: Iterator> {
    buffer: &'code StreamBuffer<I>,
    position: usize,
}

impl<'code, I: Iterator> Clone for StreamCursor<'code, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, I: Iterator> Copy for StreamCursor<'code, I> {}

impl<'code, I: Iterator> fmt::Debug for StreamCursor<'code, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<'code, I> Cursor<'code> for StreamCursor<'code, I>
where
    I: Iterator,
    I::Item: Copy + fmt::Display,
{
    type Element = I::Item;

    fn peek(&self) -> Result<I::Item, ParseError> {
        self.buffer
            .get(self.position)
            .ok_or_else(|| ParseError::end_of_input(self.position))
    }

    fn next(self) -> Self {
        match self.buffer.get(self.position) {
            Some(_) => StreamCursor {
                buffer: self.buffer,
                position: self.position + 1,
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}
