//! Raw byte sequences: `[u8]`, `[u8; N]` and `Vec<u8>`

use super::{ByteSink, ByteSource};
use crate::error::{ByteOpsError, Result};

impl ByteSource for [u8] {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self.get(index)
            .copied()
            .ok_or(ByteOpsError::out_of_bounds(index, self.len()))
    }
}

impl ByteSink for [u8] {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        let len = self.len();
        let slot = self
            .get_mut(index)
            .ok_or(ByteOpsError::out_of_bounds(index, len))?;
        *slot = value;
        Ok(())
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self.as_slice().read_byte_at(index)
    }
}

impl<const N: usize> ByteSink for [u8; N] {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        self.as_mut_slice().write_byte_at(index, value)
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self.as_slice().read_byte_at(index)
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        self.as_mut_slice().write_byte_at(index, value)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_slice_read_write() {
        let mut data = [0u8; 2];
        data.as_mut_slice().write_byte_at(1, 0xAB).unwrap();
        assert_eq!(data.as_slice().read_byte_at(1).unwrap(), 0xAB);
        assert_eq!(data, [0x00, 0xAB]);
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let mut data = [0u8; 2];
        assert_eq!(
            data.as_slice().read_byte_at(2),
            Err(ByteOpsError::out_of_bounds(2, 2))
        );
        assert_eq!(
            data.as_mut_slice().write_byte_at(5, 0),
            Err(ByteOpsError::out_of_bounds(5, 2))
        );
    }

    #[test]
    fn test_vec_does_not_grow() {
        let mut data = vec![0u8; 1];
        assert!(data.write_byte_at(1, 0xFF).is_err());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_array_delegates_to_slice() {
        let mut data = [0u8; 4];
        data.write_byte_at(3, 0x7F).unwrap();
        assert_eq!(data.read_byte_at(3).unwrap(), 0x7F);
        assert!(data.read_byte_at(4).is_err());
    }
}
