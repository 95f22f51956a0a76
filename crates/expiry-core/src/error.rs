//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while looking up account or aging records.
///
/// Not-found is a distinguished variant so callers can tell "no such user"
/// apart from a store that could not be read at all.
#[derive(Debug, Error)]
pub enum Error {
    /// No record with a matching name field.
    #[error("no entry for user {0}")]
    NotFound(String),

    /// The backing database file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The matching record line could not be parsed.
    #[error("malformed entry at line {line}")]
    Malformed {
        /// 1-based line number of the broken entry.
        line: usize,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
