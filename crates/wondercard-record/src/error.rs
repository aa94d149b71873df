//! Error types for distribution record handling.

use thiserror::Error;

use crate::RecordShape;

/// Errors that can occur when working with distribution records.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] wondercard_common::Error),

    /// Buffer length matches no known record shape.
    #[error("unrecognized record length: {0} bytes (expected 228, 448, 1252 or 1420)")]
    UnrecognizedLength(usize),

    /// Raw access outside the record buffer.
    #[error("access at {offset:#x}+{length:#x} is outside the {size}-byte record")]
    OutOfRange {
        offset: usize,
        length: usize,
        size: usize,
    },

    /// Text slot index past the last slot.
    #[error("text slot {index} out of range ({count} slots)")]
    SlotOutOfRange { index: usize, count: usize },

    /// The operation needs a field this shape does not have.
    #[error("{operation} is not available for {shape} records")]
    Unsupported {
        operation: &'static str,
        shape: RecordShape,
    },

    /// File extension disagrees with the detected record kind.
    #[error("invalid file extension: expected {expected}, got {actual}")]
    InvalidExtension { expected: String, actual: String },

    /// Replacement script does not fit the script region.
    #[error("script of {0} bytes does not fit the 996-byte script region")]
    ScriptTooLarge(usize),
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;
