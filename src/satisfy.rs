use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns a single element
pub struct Any<C> {
    _cursor: PhantomData<C>,
}

impl<'code, C: Cursor<'code>> Parser<'code> for Any<C> {
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> ParseResult<C::Element, C> {
        cursor.advance()
    }
}

/// Convenience function to create an Any parser
pub fn any<C>() -> Any<C> {
    Any {
        _cursor: PhantomData,
    }
}

/// Parser that consumes one element if it satisfies a predicate
pub struct Satisfy<C, F> {
    predicate: F,
    expected: Cow<'static, str>,
    _cursor: PhantomData<C>,
}

impl<'code, C, F> Parser<'code> for Satisfy<C, F>
where
    C: Cursor<'code>,
    F: Fn(&C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> ParseResult<C::Element, C> {
        let (element, next) = cursor.advance()?;
        if (self.predicate)(&element) {
            Ok((element, next))
        } else {
            Err(ParseError::new(
                ErrorKind::Unsatisfied {
                    expected: self.expected.clone(),
                    found: cursor.describe(),
                },
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create a Satisfy parser
///
/// `expected` names what the predicate accepts, for error messages.
pub fn satisfy<C, F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> Satisfy<C, F> {
    Satisfy {
        predicate,
        expected: expected.into(),
        _cursor: PhantomData,
    }
}

/// Parser that consumes one element and keeps whatever `f` extracts from it
///
/// Fails without consuming when `f` returns `None`.
pub struct Select<C, F> {
    selector: F,
    expected: Cow<'static, str>,
    _cursor: PhantomData<C>,
}

impl<'code, C, F, U> Parser<'code> for Select<C, F>
where
    C: Cursor<'code>,
    F: Fn(C::Element) -> Option<U>,
{
    type Cursor = C;
    type Output = U;

    fn parse(&self, cursor: C) -> ParseResult<U, C> {
        let (element, next) = cursor.advance()?;
        match (self.selector)(element) {
            Some(value) => Ok((value, next)),
            None => Err(ParseError::new(
                ErrorKind::Unsatisfied {
                    expected: self.expected.clone(),
                    found: cursor.describe(),
                },
                cursor.position(),
            )),
        }
    }
}

/// Convenience function to create a Select parser
pub fn select<C, F>(selector: F, expected: impl Into<Cow<'static, str>>) -> Select<C, F> {
    Select {
        selector,
        expected: expected.into(),
        _cursor: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{SliceCursor, StrCursor};

    #[test]
    fn test_any() {
        let cursor = StrCursor::new("中a");
        let (ch, cursor) = any().parse(cursor).unwrap();
        assert_eq!(ch, '中');
        assert_eq!(cursor.peek().unwrap(), 'a');
    }

    #[test]
    fn test_any_at_end() {
        let cursor = StrCursor::new("");
        assert!(any().parse(cursor).unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_satisfy_success() {
        let cursor = StrCursor::new("a1");
        let parser = satisfy(|c: &char| c.is_alphabetic(), "letter");

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_satisfy_failure_reports_start() {
        let cursor = StrCursor::new("1a");
        let parser = satisfy(|c: &char| c.is_alphabetic(), "letter");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position, 0);
        assert_eq!(
            error.kind,
            ErrorKind::Unsatisfied {
                expected: "letter".into(),
                found: "'1'".into(),
            }
        );
    }

    #[test]
    fn test_satisfy_over_slice() {
        let data = [2u32, 3];
        let cursor = SliceCursor::new(&data);
        let even = satisfy(|n: &&u32| **n % 2 == 0, "even number");

        let (n, cursor) = even.parse(cursor).unwrap();
        assert_eq!(*n, 2);
        assert!(even.parse(cursor).is_err());
    }

    #[test]
    fn test_select() {
        let cursor = StrCursor::new("7x");
        let digit = select(|c: char| c.to_digit(10), "digit");

        let (value, cursor) = digit.parse(cursor).unwrap();
        assert_eq!(value, 7);
        assert!(digit.parse(cursor).is_err());
    }
}
