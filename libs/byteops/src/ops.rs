//! Typed get/set operations over any byte buffer
//!
//! [`ByteOps`] pairs a [`ByteOrder`] with a buffer type. Single bytes go
//! straight to the buffer's [`ByteSource`]/[`ByteSink`] implementation;
//! wider values are assembled by the byte order.
//!
//! ```
//! use byteops::ByteOps;
//!
//! let mut buf = [0u8; 8];
//! let ops = ByteOps::<[u8]>::BIG_ENDIAN_WORD_SWAPPED;
//! ops.set_i32(&mut buf, 2, 0x0102_0304)?;
//! assert_eq!(buf, [0, 0, 0x03, 0x04, 0x01, 0x02, 0, 0]);
//! assert_eq!(ops.get_i32(&buf, 2)?, 0x0102_0304);
//! # Ok::<(), byteops::ByteOpsError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::buffer::{ByteSink, ByteSource};
use crate::error::Result;
use crate::order::ByteOrder;

/// Typed accessors for buffers of type `B`, bound to one [`ByteOrder`]
///
/// Holds no buffer and no mutable state; copies are free and can be shared
/// between threads. Callers remain responsible for not mutating the same
/// buffer region from several threads at once.
pub struct ByteOps<B: ?Sized> {
    order: ByteOrder,
    _buffer: PhantomData<fn(&B)>,
}

impl<B: ?Sized> ByteOps<B> {
    /// ABCD
    pub const BIG_ENDIAN: Self = Self::new(ByteOrder::BigEndian);

    /// DCBA
    pub const LITTLE_ENDIAN: Self = Self::new(ByteOrder::LittleEndian);

    /// CDAB
    pub const BIG_ENDIAN_WORD_SWAPPED: Self = Self::new(ByteOrder::BigEndianWordSwapped);

    /// BADC
    pub const LITTLE_ENDIAN_WORD_SWAPPED: Self = Self::new(ByteOrder::LittleEndianWordSwapped);

    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            _buffer: PhantomData,
        }
    }

    pub const fn order(&self) -> ByteOrder {
        self.order
    }
}

impl<B: ByteSource + ?Sized> ByteOps<B> {
    /// Zero is `false`, any other byte is `true`.
    pub fn get_bool(&self, buffer: &B, index: usize) -> Result<bool> {
        Ok(buffer.read_byte_at(index)? != 0)
    }

    pub fn get_i8(&self, buffer: &B, index: usize) -> Result<i8> {
        Ok(buffer.read_byte_at(index)? as i8)
    }

    pub fn get_i16(&self, buffer: &B, index: usize) -> Result<i16> {
        self.order.decode16(|i| buffer.read_byte_at(i), index)
    }

    pub fn get_i32(&self, buffer: &B, index: usize) -> Result<i32> {
        self.order.decode32(|i| buffer.read_byte_at(i), index)
    }

    pub fn get_i64(&self, buffer: &B, index: usize) -> Result<i64> {
        self.order.decode64(|i| buffer.read_byte_at(i), index)
    }

    /// Reinterprets the 32 bits at `index`; NaN payloads come back untouched.
    pub fn get_f32(&self, buffer: &B, index: usize) -> Result<f32> {
        self.get_i32(buffer, index)
            .map(|bits| f32::from_bits(bits as u32))
    }

    /// Reinterprets the 64 bits at `index`; NaN payloads come back untouched.
    pub fn get_f64(&self, buffer: &B, index: usize) -> Result<f64> {
        self.get_i64(buffer, index)
            .map(|bits| f64::from_bits(bits as u64))
    }
}

impl<B: ByteSink + ?Sized> ByteOps<B> {
    /// Writes exactly `0x01` for `true` and `0x00` for `false`.
    pub fn set_bool(&self, buffer: &mut B, index: usize, value: bool) -> Result<()> {
        buffer.write_byte_at(index, u8::from(value))
    }

    pub fn set_i8(&self, buffer: &mut B, index: usize, value: i8) -> Result<()> {
        buffer.write_byte_at(index, value as u8)
    }

    pub fn set_i16(&self, buffer: &mut B, index: usize, value: i16) -> Result<()> {
        self.order
            .encode16(|i, b| buffer.write_byte_at(i, b), index, value)
    }

    pub fn set_i32(&self, buffer: &mut B, index: usize, value: i32) -> Result<()> {
        self.order
            .encode32(|i, b| buffer.write_byte_at(i, b), index, value)
    }

    pub fn set_i64(&self, buffer: &mut B, index: usize, value: i64) -> Result<()> {
        self.order
            .encode64(|i, b| buffer.write_byte_at(i, b), index, value)
    }

    pub fn set_f32(&self, buffer: &mut B, index: usize, value: f32) -> Result<()> {
        self.set_i32(buffer, index, value.to_bits() as i32)
    }

    pub fn set_f64(&self, buffer: &mut B, index: usize, value: f64) -> Result<()> {
        self.set_i64(buffer, index, value.to_bits() as i64)
    }
}

impl<B: ?Sized> Clone for ByteOps<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for ByteOps<B> {}

impl<B: ?Sized> PartialEq for ByteOps<B> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<B: ?Sized> Eq for ByteOps<B> {}

impl<B: ?Sized> Default for ByteOps<B> {
    fn default() -> Self {
        Self::BIG_ENDIAN
    }
}

impl<B: ?Sized> From<ByteOrder> for ByteOps<B> {
    fn from(order: ByteOrder) -> Self {
        Self::new(order)
    }
}

impl<B: ?Sized> fmt::Debug for ByteOps<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteOps")
            .field("order", &self.order)
            .field("buffer", &std::any::type_name::<B>())
            .finish()
    }
}
