use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::or::OneOf;
use crate::parser::Parser;

/// Parser combinator that parses a seed and then folds any number of tails into it
///
/// This is the loop form of a left-recursive rule `X := X tail | seed`:
/// instead of recursing into `X` before consuming anything, the seed is parsed
/// once and each following tail is combined with the accumulated value from
/// left to right. Fails only if the seed fails; the tail failure that ends
/// the loop is handed to the cursor.
pub struct LeftFold<S, T, F> {
    seed: S,
    tail: T,
    fold: F,
}

impl<S, T, F> LeftFold<S, T, F> {
    pub fn new(seed: S, tail: T, fold: F) -> Self {
        LeftFold { seed, tail, fold }
    }
}

impl<'code, S, T, F> Parser<'code> for LeftFold<S, T, F>
where
    S: Parser<'code>,
    T: Parser<'code, Cursor = S::Cursor>,
    F: Fn(S::Output, T::Output) -> S::Output,
{
    type Cursor = S::Cursor;
    type Output = S::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (mut accumulated, mut cursor) = self.seed.parse(cursor)?;

        loop {
            match self.tail.parse(cursor) {
                Ok((tail, next)) => {
                    accumulated = (self.fold)(accumulated, tail);
                    let stalled = next.position() == cursor.position();
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(error) => {
                    cursor.record_failure(&error);
                    break;
                }
            }
        }

        Ok((accumulated, cursor))
    }
}

/// Convenience function to create a LeftFold parser
pub fn left_fold<'code, S, T, F>(seed: S, tail: T, fold: F) -> LeftFold<S, T, F>
where
    S: Parser<'code>,
    T: Parser<'code, Cursor = S::Cursor>,
    F: Fn(S::Output, T::Output) -> S::Output,
{
    LeftFold::new(seed, tail, fold)
}

/// Left-recursion elimination for a rule given as its alternatives
///
/// `seeds` are the alternatives that do not start with the rule itself and
/// `tails` are what follows the rule in the alternatives that do. Adding an
/// alternative to the grammar means pushing onto one of the two lists.
pub fn left_recursive<'code, S, T, F>(
    seeds: Vec<S>,
    tails: Vec<T>,
    fold: F,
) -> LeftFold<OneOf<S>, OneOf<T>, F>
where
    S: Parser<'code>,
    T: Parser<'code, Cursor = S::Cursor>,
    F: Fn(S::Output, T::Output) -> S::Output,
{
    LeftFold::new(OneOf::new(seeds), OneOf::new(tails), fold)
}
