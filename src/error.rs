use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by fallible string operations.
///
/// Malformed text is never an error: decoding substitutes U+FFFD instead.
/// Only resource exhaustion and undersized caller buffers are reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string buffer could not grow by `requested` code units.
    #[error("capacity overflow: cannot reserve {requested} more code units")]
    CapacityOverflow {
        /// Number of additional code units that were requested.
        requested: usize,
    },
    /// A destination buffer is too short to hold an encoded codepoint.
    #[error("buffer too small: {required} code units required, {available} available")]
    BufferTooSmall {
        /// Number of code units needed.
        required: usize,
        /// Number of code units the caller supplied.
        available: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn reserve<T>(buf: &mut Vec<T>, additional: usize) -> Result<()> {
    let len = buf.len();
    buf.try_reserve(additional)
        .map_err(|err: TryReserveError| {
            tracing::debug!(
                target: "unistr",
                requested = additional,
                len,
                error = %err,
                "failed to reserve string capacity"
            );
            Error::CapacityOverflow {
                requested: additional,
            }
        })
}

/// Adds two lengths, reporting overflow as a capacity error.
pub(crate) fn checked_len(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b)
        .ok_or(Error::CapacityOverflow { requested: usize::MAX })
}
