//! Endian-aware fixed-width primitive access over byte buffers
//!
//! Reads and writes booleans, bytes, 16/32/64-bit integers and IEEE-754
//! floats at arbitrary offsets, in any of four byte/word orders used by
//! industrial wire formats (Modbus register pairs and the like).
//!
//! # Architecture
//!
//! - **[`ByteOrder`]**: maps logical bytes to buffer offsets and does the
//!   shift/mask work for 2, 4 and 8 byte values
//! - **[`ByteOps`]**: typed get/set façade over a buffer type, bound to one order
//! - **[`ByteSource`] / [`ByteSink`]**: the single-byte capability a buffer
//!   must provide; implemented for `[u8]`, `[u8; N]`, `Vec<u8>`,
//!   `std::io::Cursor`, `[u16]` register images and `bytes` buffers
//! - **[`UnsignedByteOps`]**: unsigned views of the same accessors
//!
//! # Features
//!
//! - `bytes` - `Bytes`/`BytesMut` adapters (default)

pub mod buffer;
pub mod error;
pub mod ops;
pub mod order;
pub mod unsigned;

pub use buffer::{ByteSink, ByteSource};
pub use error::{ByteOpsError, Result};
pub use ops::ByteOps;
pub use order::ByteOrder;
pub use unsigned::UnsignedByteOps;
