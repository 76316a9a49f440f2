//! Error types for the retable library.

use std::io;
use thiserror::Error;

/// Result type alias for retable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the input/output boundary.
///
/// The reconstruction core itself never fails on malformed geometry;
/// comparators and detectors degrade to conservative outcomes instead
/// (see the reason enums in [`crate::reconstruct`]). Hard errors only
/// exist where word dumps are read and results are serialized.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing a word dump or serializing results.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),
}
