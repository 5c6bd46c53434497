use crate::error::ParseResult;
use crate::parser::Parser;

/// Defers building a parser until input is examined
///
/// This is what lets a grammar rule refer to itself or to a peer rule: the
/// factory is not called while the grammar is being built, only when input is
/// actually examined. The factory runs again on every application, so it may
/// close over per-call state.
///
/// A rule that recurses through a lazy parser without consuming input first
/// will recurse forever. Keeping recursion productive is up to the grammar.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursor::Cursor;
    use crate::cursors::StrCursor;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use std::cell::Cell;

    #[test]
    fn test_lazy_basic() {
        let cursor = StrCursor::new("aaaa");
        let (output, remaining) = lazy(|| literal("a")).parse(cursor).unwrap();
        assert_eq!(output, "a");
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_factory_runs_per_application() {
        let calls = Cell::new(0);
        let parser = lazy(|| {
            calls.set(calls.get() + 1);
            literal("x")
        });
        assert_eq!(calls.get(), 0);

        let cursor = StrCursor::new("xx");
        let (_, cursor) = parser.parse(cursor).unwrap();
        let _ = parser.parse(cursor).unwrap();
        assert_eq!(calls.get(), 2);
    }

    // nested = "(" nested ")" | "x", counting the depth
    fn nested<'code>() -> BoxedParser<'code, 'code, StrCursor<'code>, usize> {
        literal("(")
            .then(lazy(nested))
            .skip(literal(")"))
            .map(|depth| depth + 1)
            .or(literal("x").map(|_| 0))
            .boxed()
    }

    #[test]
    fn test_lazy_self_reference() {
        let (depth, cursor) = nested().parse(StrCursor::new("(((x)))")).unwrap();
        assert_eq!(depth, 3);
        assert!(cursor.eos());

        assert!(nested().parse(StrCursor::new("((x)")).is_err());
    }
}
