//! Error types for grammar operations

use thiserror::Error;

/// Error type for grammar operations.
///
/// Decode-side variants record how many input units were left when the failure occurred
/// (`remaining`). Use [Error::offset] to turn that into a position within the original input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of input: expected {0}")]
    EndOfInput(&'static str),
    #[error("unexpected input: expected {expected} ({remaining} remaining)")]
    Unexpected {
        expected: &'static str,
        remaining: usize,
    },
    #[error("predicate violated: {expected} ({remaining} remaining)")]
    Predicate {
        expected: &'static str,
        remaining: usize,
    },
    #[error("unrepresentable value: {0}")]
    Unrepresentable(&'static str),
    #[error("conversion rejected: {0}")]
    Conversion(&'static str),
    #[error("all {} alternatives failed", .0.len())]
    Exhausted(Vec<Error>),
    #[error("extra data found: {0} units")]
    ExtraData(usize),
}

impl Error {
    /// Returns the offset, within an input of `len` units, at which a decode error occurred.
    ///
    /// For [Error::Exhausted], the furthest offset reached by any alternative is returned.
    /// Encode-side errors carry no position and return `None`.
    pub fn offset(&self, len: usize) -> Option<usize> {
        match self {
            Self::EndOfInput(_) => Some(len),
            Self::Unexpected { remaining, .. } | Self::Predicate { remaining, .. } => {
                len.checked_sub(*remaining)
            }
            Self::ExtraData(remaining) => len.checked_sub(*remaining),
            Self::Exhausted(errors) => errors.iter().filter_map(|err| err.offset(len)).max(),
            Self::Unrepresentable(_) | Self::Conversion(_) => None,
        }
    }
}
