//! Byte and word ordering for 16/32/64-bit values
//!
//! Each [`ByteOrder`] maps the logical bytes of a value onto buffer offsets
//! relative to a starting index. Bytes are fetched and stored through caller
//! supplied accessors, so the same arithmetic serves every buffer type.
//!
//! # Naming Convention
//! Uses ABCD notation where:
//! - A = Most significant byte (MSB)
//! - D = Least significant byte (LSB)
//!
//! For 32-bit value `0x01020304` written at offset 0:
//! - `BigEndian (ABCD)`: [0x01, 0x02, 0x03, 0x04]
//! - `LittleEndian (DCBA)`: [0x04, 0x03, 0x02, 0x01]
//! - `BigEndianWordSwapped (CDAB)`: [0x03, 0x04, 0x01, 0x02]
//! - `LittleEndianWordSwapped (BADC)`: [0x02, 0x01, 0x04, 0x03]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ByteOpsError, Result};

// ============================================================================
// Layout Tables
// ============================================================================
//
// Offsets relative to the starting index, listed from the most significant
// byte of the value to the least significant one.

const BE_16: [usize; 2] = [0, 1];
const LE_16: [usize; 2] = [1, 0];

const BE_32: [usize; 4] = [0, 1, 2, 3];
const LE_32: [usize; 4] = [3, 2, 1, 0];
const BE_SWAP_32: [usize; 4] = [2, 3, 0, 1];
const LE_SWAP_32: [usize; 4] = [1, 0, 3, 2];

const BE_64: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const LE_64: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const BE_SWAP_64: [usize; 8] = [6, 7, 4, 5, 2, 3, 0, 1];
const LE_SWAP_64: [usize; 8] = [1, 0, 3, 2, 5, 4, 7, 6];

/// Byte/word order for 16/32/64-bit values
///
/// # Terminology
/// - **Byte order**: Order of bytes within each 16-bit word
/// - **Word order**: Order of 16-bit words when combining to form 32/64-bit values
///
/// Word swapping only changes values of 32 bits or wider; 16-bit values are
/// laid out identically by the plain and swapped variant of the same byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ByteOrder {
    /// Big-endian: ABCD (most significant byte first)
    ///
    /// Network byte order, used in most protocols.
    #[default]
    BigEndian,

    /// Little-endian: DCBA (least significant byte first)
    LittleEndian,

    /// Big-endian bytes, low word first: CDAB
    ///
    /// Common in Modbus devices that put the low register first.
    BigEndianWordSwapped,

    /// Little-endian bytes, high word first: BADC
    LittleEndianWordSwapped,
}

impl ByteOrder {
    /// All supported orders
    pub const ALL: [ByteOrder; 4] = [
        ByteOrder::BigEndian,
        ByteOrder::LittleEndian,
        ByteOrder::BigEndianWordSwapped,
        ByteOrder::LittleEndianWordSwapped,
    ];

    /// Canonical ABCD name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD",
            Self::LittleEndian => "DCBA",
            Self::BigEndianWordSwapped => "CDAB",
            Self::LittleEndianWordSwapped => "BADC",
        }
    }

    /// Check if bytes within a word are big-endian
    pub const fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian | Self::BigEndianWordSwapped)
    }

    /// Check if bytes within a word are little-endian
    pub const fn is_little_endian(&self) -> bool {
        !self.is_big_endian()
    }

    /// Check if words are swapped (for 32/64-bit values)
    pub const fn has_word_swap(&self) -> bool {
        matches!(
            self,
            Self::BigEndianWordSwapped | Self::LittleEndianWordSwapped
        )
    }

    /// Offsets of a 16-bit value, most significant byte first
    pub const fn layout16(&self) -> [usize; 2] {
        if self.is_big_endian() {
            BE_16
        } else {
            LE_16
        }
    }

    /// Offsets of a 32-bit value, most significant byte first
    pub const fn layout32(&self) -> [usize; 4] {
        match self {
            Self::BigEndian => BE_32,
            Self::LittleEndian => LE_32,
            Self::BigEndianWordSwapped => BE_SWAP_32,
            Self::LittleEndianWordSwapped => LE_SWAP_32,
        }
    }

    /// Offsets of a 64-bit value, most significant byte first
    pub const fn layout64(&self) -> [usize; 8] {
        match self {
            Self::BigEndian => BE_64,
            Self::LittleEndian => LE_64,
            Self::BigEndianWordSwapped => BE_SWAP_64,
            Self::LittleEndianWordSwapped => LE_SWAP_64,
        }
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Assemble a 16-bit value from the two bytes starting at `index`.
    ///
    /// `read` is called once per byte with an absolute buffer index. Any error
    /// it returns is handed back unchanged.
    pub fn decode16<R>(&self, read: R, index: usize) -> Result<i16>
    where
        R: FnMut(usize) -> Result<u8>,
    {
        assemble(&self.layout16(), read, index).map(|v| v as u16 as i16)
    }

    /// Assemble a 32-bit value from the four bytes starting at `index`.
    pub fn decode32<R>(&self, read: R, index: usize) -> Result<i32>
    where
        R: FnMut(usize) -> Result<u8>,
    {
        assemble(&self.layout32(), read, index).map(|v| v as u32 as i32)
    }

    /// Assemble a 64-bit value from the eight bytes starting at `index`.
    pub fn decode64<R>(&self, read: R, index: usize) -> Result<i64>
    where
        R: FnMut(usize) -> Result<u8>,
    {
        assemble(&self.layout64(), read, index).map(|v| v as i64)
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Store a 16-bit value into the two bytes starting at `index`.
    ///
    /// Bytes are written most significant first in layout order. A failing
    /// `write` stops the encode; bytes already written stay written.
    pub fn encode16<W>(&self, write: W, index: usize, value: i16) -> Result<()>
    where
        W: FnMut(usize, u8) -> Result<()>,
    {
        disassemble(&self.layout16(), write, index, u64::from(value as u16))
    }

    /// Store a 32-bit value into the four bytes starting at `index`.
    pub fn encode32<W>(&self, write: W, index: usize, value: i32) -> Result<()>
    where
        W: FnMut(usize, u8) -> Result<()>,
    {
        disassemble(&self.layout32(), write, index, u64::from(value as u32))
    }

    /// Store a 64-bit value into the eight bytes starting at `index`.
    pub fn encode64<W>(&self, write: W, index: usize, value: i64) -> Result<()>
    where
        W: FnMut(usize, u8) -> Result<()>,
    {
        disassemble(&self.layout64(), write, index, value as u64)
    }
}

/// Absolute buffer index of `offset` bytes past `index`
fn position(index: usize, offset: usize) -> Result<usize> {
    index
        .checked_add(offset)
        .ok_or(ByteOpsError::IndexOverflow { index, offset })
}

fn assemble<R>(layout: &[usize], mut read: R, index: usize) -> Result<u64>
where
    R: FnMut(usize) -> Result<u8>,
{
    let mut value = 0u64;
    for &offset in layout {
        let byte = read(position(index, offset)?)?;
        value = (value << 8) | u64::from(byte);
    }
    Ok(value)
}

fn disassemble<W>(layout: &[usize], mut write: W, index: usize, value: u64) -> Result<()>
where
    W: FnMut(usize, u8) -> Result<()>,
{
    let width = layout.len();
    for (significance, &offset) in layout.iter().enumerate() {
        let shift = 8 * (width - 1 - significance);
        write(position(index, offset)?, (value >> shift) as u8)?;
    }
    Ok(())
}

// ============================================================================
// Naming
// ============================================================================

impl FromStr for ByteOrder {
    type Err = ByteOpsError;

    /// Parse a byte order name
    ///
    /// Case-insensitive; `-` and `_` are ignored, so "AB-CD", "big_endian"
    /// and "BigEndian" are all accepted.
    /// - "ABCD", "BE", "BIG_ENDIAN", "ABCDEFGH", "AB" → BigEndian
    /// - "DCBA", "LE", "LITTLE_ENDIAN", "HGFEDCBA", "BA" → LittleEndian
    /// - "CDAB", "BIG_ENDIAN_SWAP", "BIG_ENDIAN_LOW_HIGH", "GHEFCDAB" → BigEndianWordSwapped
    /// - "BADC", "LITTLE_ENDIAN_SWAP", "LITTLE_ENDIAN_LOW_HIGH", "BADCFEHG" → LittleEndianWordSwapped
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_uppercase();

        let order = match normalized.trim() {
            "ABCD" | "BE" | "BIGENDIAN" | "ABCDEFGH" | "AB" => Self::BigEndian,
            "DCBA" | "LE" | "LITTLEENDIAN" | "HGFEDCBA" | "BA" => Self::LittleEndian,
            "CDAB" | "BIGENDIANWORDSWAPPED" | "BIGENDIANSWAP" | "BIGENDIANLOWHIGH"
            | "GHEFCDAB" => Self::BigEndianWordSwapped,
            "BADC" | "LITTLEENDIANWORDSWAPPED" | "LITTLEENDIANSWAP" | "LITTLEENDIANLOWHIGH"
            | "BADCFEHG" => Self::LittleEndianWordSwapped,
            _ => {
                debug!(input = %s, "Rejected byte order name");
                return Err(ByteOpsError::unknown_byte_order(s));
            },
        };

        if s != order.as_str() {
            debug!(input = %s, order = order.as_str(), "Resolved byte order alias");
        }
        Ok(order)
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = ByteOpsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ByteOrder> for &'static str {
    fn from(order: ByteOrder) -> Self {
        order.as_str()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
