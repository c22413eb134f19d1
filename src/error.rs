//! Error and soft-validation types.

use thiserror::Error;

/// The errors surfaced by the compressor and the decompressor.
#[derive(Debug, Error)]
pub enum Error {
    /// The cache window width was zero at construction.
    #[error("cache window width must be a positive integer")]
    Window,

    /// A file open, read or write failed. Propagated unchanged.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A compressed chunk was corrupt or truncated. No partial-chunk
    /// recovery is attempted.
    #[error("could not decompress chunk: {0}")]
    Decode(#[source] std::io::Error),

    /// A decompressed record held bytes that are not valid UTF-8.
    #[error("record is not valid utf-8: {0}")]
    Record(#[from] std::string::FromUtf8Error),
}

/// What `compress` did with one assignment. Malformed assignments are
/// skipped with a warning rather than aborting a long run, and the
/// outcome reports the skip so callers can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The assignment was encoded and cached.
    Applied,
    /// The assignment was rejected; the cache was left untouched.
    Skipped(SkipReason),
}

/// Why an assignment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The assignment held no entries.
    Empty,
    /// The assignment's keys are not a subset of the universe.
    UnknownIdentifier,
}
