//! Byte order notation for memory-dump decoding
//!
//! Dumps name their ordering with ABCD notation, where A is the most
//! significant byte and D the least. For the 32-bit value `0x12345678`:
//!
//! - `BigEndian (ABCD)`: `[0x12, 0x34, 0x56, 0x78]`
//! - `LittleEndian (DCBA)`: `[0x78, 0x56, 0x34, 0x12]`
//! - `BigEndianSwap (CDAB)`: `[0x56, 0x78, 0x12, 0x34]`
//! - `LittleEndianSwap (BADC)`: `[0x34, 0x12, 0x78, 0x56]`

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BitrigError;

/// Byte/word order for assembling 16/32-bit values from dump bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ByteOrder {
    /// ABCD, most significant byte first (network order)
    BigEndian,

    /// DCBA, least significant byte first
    LittleEndian,

    /// CDAB, big-endian words in swapped order
    BigEndianSwap,

    /// BADC, little-endian words in swapped order
    LittleEndianSwap,
}

impl ByteOrder {
    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::BigEndianSwap => "CDAB (Big-Endian Swap)",
            Self::LittleEndianSwap => "BADC (Little-Endian Swap)",
        }
    }

    /// Check if this is a big-endian variant
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian | Self::BigEndianSwap)
    }

    /// Check if this is a little-endian variant
    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian | Self::LittleEndianSwap)
    }

    /// Check if the 16-bit halves are swapped within 32-bit values
    pub fn has_word_swap(&self) -> bool {
        matches!(self, Self::BigEndianSwap | Self::LittleEndianSwap)
    }
}

impl FromStr for ByteOrder {
    type Err = BitrigError;

    /// Parse ABCD notation and the usual endianness aliases:
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → BigEndian
    /// - "DCBA", "DC-BA", "LE", "LITTLE_ENDIAN" → LittleEndian
    /// - "CDAB", "CD-AB", "BIG_ENDIAN_SWAP" → BigEndianSwap
    /// - "BADC", "BA-DC", "LITTLE_ENDIAN_SWAP" → LittleEndianSwap
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::BigEndian),
            "DCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Ok(Self::LittleEndian),
            "CDAB" | "BIG_ENDIAN_SWAP" | "BIGENDIANSWAP" => Ok(Self::BigEndianSwap),
            "BADC" | "LITTLE_ENDIAN_SWAP" | "LITTLEENDIANSWAP" => Ok(Self::LittleEndianSwap),
            _ => Err(BitrigError::UnknownByteOrder(s.to_string())),
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}
