//! Unsigned accessors
//!
//! Same bytes as the signed accessors on [`ByteOps`], read back in the
//! unsigned domain. Bring [`UnsignedByteOps`] into scope to use them.

use crate::buffer::{ByteSink, ByteSource};
use crate::error::Result;
use crate::ops::ByteOps;

/// Unsigned get/set for [`ByteOps`]
pub trait UnsignedByteOps<B: ?Sized> {
    fn get_u8(&self, buffer: &B, index: usize) -> Result<u8>
    where
        B: ByteSource;

    fn get_u16(&self, buffer: &B, index: usize) -> Result<u16>
    where
        B: ByteSource;

    fn get_u32(&self, buffer: &B, index: usize) -> Result<u32>
    where
        B: ByteSource;

    fn get_u64(&self, buffer: &B, index: usize) -> Result<u64>
    where
        B: ByteSource;

    fn set_u8(&self, buffer: &mut B, index: usize, value: u8) -> Result<()>
    where
        B: ByteSink;

    fn set_u16(&self, buffer: &mut B, index: usize, value: u16) -> Result<()>
    where
        B: ByteSink;

    fn set_u32(&self, buffer: &mut B, index: usize, value: u32) -> Result<()>
    where
        B: ByteSink;

    fn set_u64(&self, buffer: &mut B, index: usize, value: u64) -> Result<()>
    where
        B: ByteSink;
}

impl<B: ?Sized> UnsignedByteOps<B> for ByteOps<B> {
    fn get_u8(&self, buffer: &B, index: usize) -> Result<u8>
    where
        B: ByteSource,
    {
        self.get_i8(buffer, index).map(|v| v as u8)
    }

    fn get_u16(&self, buffer: &B, index: usize) -> Result<u16>
    where
        B: ByteSource,
    {
        self.get_i16(buffer, index).map(|v| v as u16)
    }

    fn get_u32(&self, buffer: &B, index: usize) -> Result<u32>
    where
        B: ByteSource,
    {
        self.get_i32(buffer, index).map(|v| v as u32)
    }

    fn get_u64(&self, buffer: &B, index: usize) -> Result<u64>
    where
        B: ByteSource,
    {
        self.get_i64(buffer, index).map(|v| v as u64)
    }

    fn set_u8(&self, buffer: &mut B, index: usize, value: u8) -> Result<()>
    where
        B: ByteSink,
    {
        self.set_i8(buffer, index, value as i8)
    }

    fn set_u16(&self, buffer: &mut B, index: usize, value: u16) -> Result<()>
    where
        B: ByteSink,
    {
        self.set_i16(buffer, index, value as i16)
    }

    fn set_u32(&self, buffer: &mut B, index: usize, value: u32) -> Result<()>
    where
        B: ByteSink,
    {
        self.set_i32(buffer, index, value as i32)
    }

    fn set_u64(&self, buffer: &mut B, index: usize, value: u64) -> Result<()>
    where
        B: ByteSink,
    {
        self.set_i64(buffer, index, value as i64)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    type SliceOps = ByteOps<[u8]>;

    #[test]
    fn test_get_max_values() {
        let ops = SliceOps::BIG_ENDIAN;
        assert_eq!(ops.get_u8(&[0xFF], 0).unwrap(), u8::MAX);
        assert_eq!(ops.get_u16(&[0xFF; 2], 0).unwrap(), u16::MAX);
        assert_eq!(ops.get_u32(&[0xFF; 4], 0).unwrap(), u32::MAX);
        assert_eq!(ops.get_u64(&[0xFF; 8], 0).unwrap(), u64::MAX);
    }

    #[test]
    fn test_set_max_values() {
        let ops = SliceOps::BIG_ENDIAN;
        let mut buf = [0u8; 8];

        ops.set_u8(&mut buf, 0, u8::MAX).unwrap();
        assert_eq!(buf[0], 0xFF);

        ops.set_u16(&mut buf, 0, u16::MAX).unwrap();
        assert_eq!(&buf[..2], &[0xFF, 0xFF]);

        ops.set_u32(&mut buf, 0, u32::MAX).unwrap();
        assert_eq!(&buf[..4], &[0xFF; 4]);

        ops.set_u64(&mut buf, 0, u64::MAX).unwrap();
        assert_eq!(buf, [0xFF; 8]);
        assert_eq!(ops.get_u64(&buf, 0).unwrap(), u64::MAX);
    }

    #[test]
    fn test_unsigned_follows_order() {
        let ops = SliceOps::LITTLE_ENDIAN_WORD_SWAPPED;
        let mut buf = [0u8; 4];
        ops.set_u32(&mut buf, 0, 0xF1F2_F3F4).unwrap();
        assert_eq!(buf, [0xF2, 0xF1, 0xF4, 0xF3]);
        assert_eq!(ops.get_u32(&buf, 0).unwrap(), 0xF1F2_F3F4);
        assert_eq!(ops.get_i32(&buf, 0).unwrap(), 0xF1F2_F3F4u32 as i32);
    }
}
