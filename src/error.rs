use std::borrow::Cow;
use std::cell::RefCell;
use thiserror::Error;

/// What went wrong during a parse attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A literal sequence did not match the input
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: Cow<'static, str>,
        found: String,
    },
    /// A symbol was read but the predicate rejected it
    #[error("expected {expected}, found {found}")]
    Unsatisfied {
        expected: Cow<'static, str>,
        found: String,
    },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Top-level parse finished with input left over
    #[error("unexpected trailing input starting at {found}")]
    TrailingInput { found: String },
    /// The lexical shape of a number was accepted but its value was not
    #[error("malformed number `{literal}`: {reason}")]
    NumberConversion { literal: String, reason: String },
    #[error("unterminated {0}")]
    Unterminated(&'static str),
    #[error("unrecognized token starting with {found}")]
    UnrecognizedToken { found: String },
    /// Nested groups went past the configured limit
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

/// A located parse failure.
///
/// `position` is measured in the units of the cursor that produced the error:
/// byte offsets for text, element indices for slices.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(ErrorKind::UnexpectedEndOfInput, position)
    }

    pub fn custom(message: impl Into<Cow<'static, str>>, position: usize) -> Self {
        Self::new(ErrorKind::Custom(message.into()), position)
    }

    /// Keep whichever failure progressed further into the input.
    ///
    /// Ties go to `other`, so the last alternative of an ordered choice
    /// reports when every alternative stalls at the same place.
    pub fn furthest(self, other: ParseError) -> ParseError {
        if self.position > other.position {
            self
        } else {
            other
        }
    }

    /// Translate the position into another coordinate space, e.g. token
    /// indices into byte offsets.
    pub fn relocate(self, f: impl FnOnce(usize) -> usize) -> Self {
        Self {
            position: f(self.position),
            ..self
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEndOfInput)
    }
}

/// Result of applying a parser: the value and the advanced cursor, or a failure.
pub type ParseResult<O, C> = Result<(O, C), ParseError>;

/// The furthest failure a parse backed out of
///
/// Combinators that recover from a failure (`many`, `optional`, `left_fold`,
/// an `or` whose later alternative succeeds) hand what they dropped to the
/// cursor, and cursors that carry a log keep the one that got furthest.
/// [`complete`](crate::all::complete) reports it when the parse as a whole
/// stops short of it.
#[derive(Debug, Default)]
pub struct FailureLog {
    furthest: RefCell<Option<ParseError>>,
}

impl FailureLog {
    pub fn new() -> Self {
        FailureLog::default()
    }

    /// Keep `error` if it is at least as far as anything recorded so far
    pub fn record(&self, error: &ParseError) {
        let mut furthest = self.furthest.borrow_mut();
        if furthest
            .as_ref()
            .is_none_or(|current| error.position >= current.position)
        {
            *furthest = Some(error.clone());
        }
    }

    pub fn furthest(&self) -> Option<ParseError> {
        self.furthest.borrow().clone()
    }
}
