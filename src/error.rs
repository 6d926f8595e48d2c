//! Error type shared by all functions in this crate
//!
//! Every failure carries the [ErrorKind] and the name of the function that
//! raised it, so callers can match on the cause without parsing messages.

use std::fmt;
use thiserror::Error;

/// Category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A count or result falls outside of the representable range,
    /// e.g. zero terms requested or an integer overflow
    OutOfRange,

    /// A sequence that needs at least one element is empty
    ZeroSize,

    /// The input is not a permutation of `0..N`
    InvalidPermutation,

    /// A degenerate argument, such as a zero operand to lcm or
    /// two permutations of different sizes
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::OutOfRange => "argument out of range",
            ErrorKind::ZeroSize => "empty input",
            ErrorKind::InvalidPermutation => "invalid permutation",
            ErrorKind::InvalidArgument => "invalid argument",
        };
        f.write_str(s)
    }
}

/// Error raised by the number theory functions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{op}: {kind}")]
pub struct Error {
    kind: ErrorKind,
    op: &'static str,
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Error of `kind` raised by the function named `op`
    pub(crate) fn new(kind: ErrorKind, op: &'static str) -> Self {
        tracing::debug!(op, %kind, "rejected input");
        Error { kind, op }
    }

    #[inline]
    pub(crate) fn out_of_range(op: &'static str) -> Self {
        Self::new(ErrorKind::OutOfRange, op)
    }

    #[inline]
    pub(crate) fn zero_size(op: &'static str) -> Self {
        Self::new(ErrorKind::ZeroSize, op)
    }

    #[inline]
    pub(crate) fn invalid_permutation(op: &'static str) -> Self {
        Self::new(ErrorKind::InvalidPermutation, op)
    }

    #[inline]
    pub(crate) fn invalid_argument(op: &'static str) -> Self {
        Self::new(ErrorKind::InvalidArgument, op)
    }

    /// Category of the failure
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the function that raised the error
    #[inline]
    pub fn op(&self) -> &'static str {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        assert_eq!(Error::zero_size("gcd_all").to_string(), "gcd_all: empty input");
        assert_eq!(Error::invalid_argument("lcm").to_string(), "lcm: invalid argument");
        assert_eq!(
            Error::invalid_permutation("invert").to_string(),
            "invert: invalid permutation"
        );
        assert_eq!(
            Error::out_of_range("to_cont_frac").to_string(),
            "to_cont_frac: argument out of range"
        );
    }

    #[test]
    fn accessors_test() {
        let e = Error::new(ErrorKind::OutOfRange, "lcm_all");
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(e.op(), "lcm_all");
        assert_ne!(e, Error::new(ErrorKind::OutOfRange, "lcm"));
    }
}
