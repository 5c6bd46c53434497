use crate::cursor::{Cursor, SourceCursor};
use crate::error::{FailureLog, ParseError};

/// Cursor that keeps the furthest failure the parse recovered from
///
/// Wraps another cursor; every copy shares the same [`FailureLog`].
#[derive(Debug, Clone, Copy)]
pub struct Tracked<'code, C> {
    inner: C,
    log: &'code FailureLog,
}

impl<'code, C> Tracked<'code, C> {
    pub fn new(inner: C, log: &'code FailureLog) -> Self {
        Tracked { inner, log }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<'code, C: Cursor<'code>> Cursor<'code> for Tracked<'code, C> {
    type Element = C::Element;

    fn peek(&self) -> Result<C::Element, ParseError> {
        self.inner.peek()
    }

    fn next(self) -> Self {
        Tracked {
            inner: self.inner.next(),
            log: self.log,
        }
    }

    fn position(&self) -> usize {
        self.inner.position()
    }

    fn eos(&self) -> bool {
        self.inner.eos()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn record_failure(&self, error: &ParseError) {
        self.log.record(error);
    }

    fn recorded_failure(&self) -> Option<ParseError> {
        self.log.furthest()
    }
}

impl<'code, C: SourceCursor<'code>> SourceCursor<'code> for Tracked<'code, C> {
    type Slice = C::Slice;

    fn source(&self) -> &'code C::Slice {
        self.inner.source()
    }

    fn consumed_since(&self, earlier: &Self) -> &'code C::Slice {
        self.inner.consumed_since(&earlier.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::StrCursor;
    use crate::literal::literal;
    use crate::optional::optional;
    use crate::parser::Parser;
    use crate::position::PositionExt;

    #[test]
    fn test_delegates_to_inner() {
        let log = FailureLog::new();
        let cursor = Tracked::new(StrCursor::new("ñx"), &log);

        let (ch, cursor) = cursor.advance().unwrap();
        assert_eq!(ch, 'ñ');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.inner().remaining(), "x");

        let ((_, text), _) = literal("x").recognize().parse(cursor).unwrap();
        assert_eq!(text, "x");
    }

    #[test]
    fn test_recovered_failure_is_kept() {
        let log = FailureLog::new();
        let cursor = Tracked::new(StrCursor::new("ab"), &log);
        let parser = optional(literal("a").then(literal("c")));

        let (matched, after) = parser.parse(cursor).unwrap();
        assert!(matched.is_none());
        assert_eq!(after.position(), 0);
        assert_eq!(after.recorded_failure().map(|error| error.position), Some(1));
    }

    #[test]
    fn test_plain_cursor_keeps_nothing() {
        let cursor = StrCursor::new("ab");
        let (_, after) = optional(literal("a").then(literal("c"))).parse(cursor).unwrap();
        assert_eq!(after.recorded_failure(), None);
    }
}
