//! Modbus register images: `[u16]` and `Vec<u16>`
//!
//! A register image is addressed as bytes the way registers travel on the
//! wire: byte `2r` is the high byte of register `r`, byte `2r + 1` the low
//! byte. A 32-bit value read from two holding registers therefore decodes
//! with the same [`ByteOrder`](crate::ByteOrder) the device documents:
//!
//! ```
//! use byteops::{ByteOps, ByteOrder};
//!
//! // 25.0f32 = 0x41C8_0000, device sends the low word first (CDAB)
//! let regs: [u16; 2] = [0x0000, 0x41C8];
//! let ops = ByteOps::<[u16]>::new(ByteOrder::BigEndianWordSwapped);
//! assert_eq!(ops.get_f32(&regs, 0).unwrap(), 25.0);
//! ```

use super::{ByteSink, ByteSource};
use crate::error::{ByteOpsError, Result};

/// Split a byte index into (register, is_low_byte)
#[inline]
fn locate(index: usize) -> (usize, bool) {
    (index / 2, index % 2 == 1)
}

impl ByteSource for [u16] {
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        let (reg, low) = locate(index);
        let [high_byte, low_byte] = self
            .get(reg)
            .ok_or(ByteOpsError::out_of_bounds(index, self.len() * 2))?
            .to_be_bytes();
        Ok(if low { low_byte } else { high_byte })
    }
}

impl ByteSink for [u16] {
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        let len = self.len() * 2;
        let (reg, low) = locate(index);
        let slot = self
            .get_mut(reg)
            .ok_or(ByteOpsError::out_of_bounds(index, len))?;
        let mut bytes = slot.to_be_bytes();
        bytes[usize::from(low)] = value;
        *slot = u16::from_be_bytes(bytes);
        Ok(())
    }
}

impl ByteSource for Vec<u16> {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self.as_slice().read_byte_at(index)
    }
}

impl ByteSink for Vec<u16> {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        self.as_mut_slice().write_byte_at(index, value)
    }
}
