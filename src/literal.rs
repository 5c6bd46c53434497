use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string character by character
///
/// On a mismatch or early end of input no partial consumption is visible:
/// the error points at the start of the literal.
pub struct Literal<C> {
    expected: Cow<'static, str>,
    _cursor: PhantomData<C>,
}

impl<C> Literal<C> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
            _cursor: PhantomData,
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code, C> Parser<'code> for Literal<C>
where
    C: Cursor<'code, Element = char>,
{
    type Cursor = C;
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: C) -> ParseResult<Self::Output, C> {
        let mut current = cursor;

        for expected_char in self.expected.chars() {
            match current.advance() {
                Ok((found, next)) if found == expected_char => current = next,
                Ok(_) => {
                    return Err(ParseError::new(
                        ErrorKind::Mismatch {
                            expected: format!("'{}'", self.expected).into(),
                            found: current.describe(),
                        },
                        cursor.position(),
                    ));
                }
                Err(_) => return Err(ParseError::end_of_input(cursor.position())),
            }
        }

        // Clone is cheap here - just copies the reference for &'static str
        Ok((self.expected.clone(), current))
    }
}

/// Convenience function to create a Literal parser
pub fn literal<C>(expected: impl Into<Cow<'static, str>>) -> Literal<C> {
    Literal::new(expected)
}
