//! Network buffers from the `bytes` crate
//!
//! `Bytes` is shared and immutable, so it is a source only. `BytesMut` is
//! readable and writable within its current length; spare capacity is not
//! addressable.

use bytes::{Bytes, BytesMut};

use super::{ByteSink, ByteSource};
use crate::error::Result;

impl ByteSource for Bytes {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self[..].read_byte_at(index)
    }
}

impl ByteSource for BytesMut {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self[..].read_byte_at(index)
    }
}

impl ByteSink for BytesMut {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        self[..].write_byte_at(index, value)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::ByteOpsError;

    #[test]
    fn test_bytes_mut_len_not_capacity() {
        let mut buf = BytesMut::with_capacity(16);
        buf.extend_from_slice(&[0x01, 0x02]);

        buf.write_byte_at(1, 0x22).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x22]);
        assert_eq!(
            buf.write_byte_at(2, 0x33),
            Err(ByteOpsError::out_of_bounds(2, 2))
        );
    }

    #[test]
    fn test_frozen_bytes_readable() {
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[0xCA, 0xFE]);
        let frozen = buf.freeze();
        assert_eq!(frozen.read_byte_at(1).unwrap(), 0xFE);
        assert!(frozen.read_byte_at(2).is_err());
    }
}
