use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input
pub struct Empty<C> {
    _cursor: PhantomData<C>,
}

impl<'code, C: Cursor<'code>> Parser<'code> for Empty<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: C) -> ParseResult<(), C> {
        Ok(((), cursor))
    }
}

/// Convenience function to create an Empty parser
pub fn empty<C>() -> Empty<C> {
    Empty {
        _cursor: PhantomData,
    }
}

/// Parser that always fails without consuming input
pub struct Fail<C, O> {
    message: Cow<'static, str>,
    _phantom: PhantomData<(C, O)>,
}

impl<'code, C: Cursor<'code>, O> Parser<'code> for Fail<C, O> {
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        Err(ParseError::new(
            ErrorKind::Custom(self.message.clone()),
            cursor.position(),
        ))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<C, O>(message: impl Into<Cow<'static, str>>) -> Fail<C, O> {
    Fail {
        message: message.into(),
        _phantom: PhantomData,
    }
}

/// Parser that succeeds only when no input remains
pub struct EndOfInput<C> {
    _cursor: PhantomData<C>,
}

impl<'code, C: Cursor<'code>> Parser<'code> for EndOfInput<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: C) -> ParseResult<(), C> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::new(
                ErrorKind::TrailingInput {
                    found: cursor.describe(),
                },
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<C>() -> EndOfInput<C> {
    EndOfInput {
        _cursor: PhantomData,
    }
}
