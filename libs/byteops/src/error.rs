//! Error types for byteops

use thiserror::Error;

/// Errors surfaced by buffer accessors and byte order selection.
///
/// The ordering and façade layers never construct `IndexOutOfBounds`
/// themselves; it comes from the buffer adapter and is passed through as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ByteOpsError {
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Index overflow: {index} + {offset} exceeds usize::MAX")]
    IndexOverflow { index: usize, offset: usize },

    #[error("Unknown byte order: {0}")]
    UnknownByteOrder(String),
}

pub type Result<T> = std::result::Result<T, ByteOpsError>;

impl ByteOpsError {
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        ByteOpsError::IndexOutOfBounds { index, len }
    }

    pub fn unknown_byte_order(name: impl Into<String>) -> Self {
        ByteOpsError::UnknownByteOrder(name.into())
    }
}
