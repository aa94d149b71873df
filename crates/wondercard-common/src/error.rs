//! Error types for wondercard-common.

use thiserror::Error;

/// Common error type for Wondercard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A byte range falls outside the buffer.
    #[error("range {offset:#x}+{length:#x} is outside a buffer of {size:#x} bytes")]
    OutOfRange {
        offset: usize,
        length: usize,
        size: usize,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
