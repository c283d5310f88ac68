//! Error types for the configuration-facing surface.
//!
//! The width-tier functions are total (indices and counts wrap, nothing
//! rejects); only byte-order parsing and length-checked slice reads can fail.

use thiserror::Error;

/// Result type for bitrig operations
pub type Result<T> = std::result::Result<T, BitrigError>;

/// Errors produced when decoding dump buffers or parsing byte-order notation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitrigError {
    /// Unrecognized byte-order notation
    #[error("unknown byte order: {0}")]
    UnknownByteOrder(String),

    /// Slice shorter than the requested width
    #[error("buffer too short: need {needed} bytes, got {available}")]
    BufferTooShort { needed: usize, available: usize },
}
