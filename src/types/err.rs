//! Error types used in the library.
//!
//! - Parse errors are external --- malformed clause or task text is returned to the caller as is, and never coerced into something else.
//! - State errors follow from a request the context is unable to act on, e.g. a resolution without any goal.
//! - Derivation errors are internal, and indicate the bookkeeping of the knowledge database has been broken.
//!   These are very unlikely to occur during use, and if one does occur it is a bug.
//!
//! Failing to remove some clause which is not a premise, and failing to refute the negation of a goal are *not* errors.
//! Each is noted in the relevant [report](crate::reports) instead.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The umbrella of errors returned by the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Derivation(DerivationError),
    Parse(ParseError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Derivation(e) => write!(f, "Derivation error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
        }
    }
}

/// Noted errors when reconstructing a proof from the derivation of the empty clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DerivationError {
    /// Some parent of a resolvent does not precede the resolvent in the proof.
    ///
    /// Every parent is a premise, a unit clause of the negated goal, or an earlier resolvent.
    /// So, this is quite serious…
    MissingParent,
}

impl From<DerivationError> for ErrorKind {
    fn from(e: DerivationError) -> Self {
        ErrorKind::Derivation(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// The final character of a task is not one of the task operators.
    UnknownOperator(char),

    /// Some line could not be read.
    Unreadable,

    /// Some issue at a specific (1-indexed) line.
    Line(usize, Box<ParseError>),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "nothing to parse"),
            Self::Negation => write!(f, "negation without a variable"),
            Self::UnknownOperator(c) => write!(f, "'{c}' is not one of '?', '+', '-'"),
            Self::Unreadable => write!(f, "unreadable input"),
            Self::Line(line, e) => write!(f, "{e} (line {line})"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors due to the state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A resolution was requested, though no goal has been given.
    NoGoal,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
