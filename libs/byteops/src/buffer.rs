//! Single-byte buffer access
//!
//! A buffer type joins the crate by implementing [`ByteSource`] (and
//! [`ByteSink`] if writable). Everything wider than a byte is derived from
//! these two primitives by [`ByteOrder`](crate::ByteOrder).
//!
//! Indices are absolute: cursors and other position-aware buffers are
//! addressed from the start of their storage, not from their position.
//! Adapters do the bounds checking and report it as
//! [`ByteOpsError::IndexOutOfBounds`](crate::ByteOpsError::IndexOutOfBounds).

pub mod cursor;
pub mod registers;
pub mod slice;

#[cfg(feature = "bytes")]
pub mod bytes_buf;

use crate::error::Result;

/// Read one byte at an absolute index
pub trait ByteSource {
    fn read_byte_at(&self, index: usize) -> Result<u8>;
}

/// Write one byte at an absolute index
///
/// Implementations never grow the buffer; writing past the end is an error.
pub trait ByteSink {
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()>;
}
