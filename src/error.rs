//! Error values shared by the postfix codec and the NFA builder

use thiserror::Error;

/// An error from translating, decoding, or compiling a pattern
///
/// Every fallible operation in this crate fails by value with one of these;
/// nothing panics on bad input. The original input is carried alongside the
/// [`ErrorKind`] so that callers reporting the error don't have to thread the
/// pattern through themselves. Patterns are single-line, so there is no
/// line/column metadata to report — the kind plus the input is the whole
/// story.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("{kind} in {input:?}")]
pub struct Error {
    /// The input string (infix or postfix) that produced this error
    pub input: String,
    pub kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(input: &str, kind: ErrorKind) -> Self {
        Error { input: input.to_owned(), kind }
    }
}

/// The concrete kinds of failure
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The encoder found an unpaired `(` or `)`
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    /// A postfix sequence underflowed its operand stack, or left more than
    /// one operand behind after the last character
    #[error("malformed postfix expression")]
    MalformedPostfix,
    /// An operator reached the NFA builder without enough operands — a unary
    /// operator opening the pattern, or a binary operator missing its
    /// right-hand side
    #[error("operator '{op}' is missing an operand")]
    DanglingOperator { op: char },
}
