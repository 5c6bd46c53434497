use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator for dependent sequencing
///
/// Runs the first parser, builds the second parser from its output, and runs
/// that on the remaining input. Useful when what comes next depends on what
/// was just read, e.g. the closing delimiter of a long bracket.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
