//! Position-aware buffers: `std::io::Cursor`
//!
//! Access is absolute over the cursor's backing storage. The cursor position
//! is neither consulted nor moved, so typed reads can be mixed freely with
//! `std::io::Read`/`Write` calls on the same cursor.

use std::io::Cursor;

use super::{ByteSink, ByteSource};
use crate::error::Result;

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    #[inline]
    fn read_byte_at(&self, index: usize) -> Result<u8> {
        self.get_ref().as_ref().read_byte_at(index)
    }
}

impl<T: AsMut<[u8]>> ByteSink for Cursor<T> {
    #[inline]
    fn write_byte_at(&mut self, index: usize, value: u8) -> Result<()> {
        self.get_mut().as_mut().write_byte_at(index, value)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::ByteOpsError;

    #[test]
    fn test_position_is_ignored() {
        let mut cursor = Cursor::new(vec![0x10, 0x20, 0x30]);
        cursor.set_position(2);

        assert_eq!(cursor.read_byte_at(0).unwrap(), 0x10);
        cursor.write_byte_at(1, 0x21).unwrap();

        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.get_ref(), &vec![0x10, 0x21, 0x30]);
    }

    #[test]
    fn test_borrowed_storage() {
        let mut backing = [0u8; 2];
        let mut cursor = Cursor::new(&mut backing[..]);
        cursor.write_byte_at(0, 0xEE).unwrap();
        assert_eq!(
            cursor.write_byte_at(2, 0),
            Err(ByteOpsError::out_of_bounds(2, 2))
        );
        assert_eq!(backing, [0xEE, 0x00]);
    }
}
