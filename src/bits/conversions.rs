//! Assemble words, double words, and floats from dump bytes.
//!
//! All readers are built on the tier compose functions rather than the
//! standard `from_be_bytes`/`from_le_bytes`, so the byte-to-word-to-dword
//! layering stays the single source of truth for how values are assembled.

use crate::error::{BitrigError, Result};
use crate::float::decode_float_bits;

use super::byte_order::ByteOrder;
use super::{dword, word};

/// Assemble a word from a 2-byte dump buffer.
pub fn word_from_dump(bytes: &[u8; 2], order: ByteOrder) -> u16 {
    if order.is_big_endian() {
        word::from_bytes(bytes[0], bytes[1])
    } else {
        word::from_bytes(bytes[1], bytes[0])
    }
}

/// Assemble a double word from a 4-byte dump buffer.
pub fn dword_from_dump(bytes: &[u8; 4], order: ByteOrder) -> u32 {
    let value = if order.is_big_endian() {
        dword::from_words(
            word::from_bytes(bytes[0], bytes[1]),
            word::from_bytes(bytes[2], bytes[3]),
        )
    } else {
        dword::from_words(
            word::from_bytes(bytes[3], bytes[2]),
            word::from_bytes(bytes[1], bytes[0]),
        )
    };

    if order.has_word_swap() {
        dword::swap_words(value)
    } else {
        value
    }
}

/// Decode an IEEE-754 single-precision float from a 4-byte dump buffer.
///
/// Goes through [`decode_float_bits`], so the decode inherits its documented
/// NaN and denormal behavior.
pub fn float_from_dump(bytes: &[u8; 4], order: ByteOrder) -> f32 {
    decode_float_bits(dword_from_dump(bytes, order))
}

/// Length-checked variant of [`word_from_dump`], reading the first 2 bytes.
pub fn word_from_slice(bytes: &[u8], order: ByteOrder) -> Result<u16> {
    if bytes.len() < 2 {
        return Err(BitrigError::BufferTooShort { needed: 2, available: bytes.len() });
    }
    Ok(word_from_dump(&[bytes[0], bytes[1]], order))
}

/// Length-checked variant of [`dword_from_dump`], reading the first 4 bytes.
pub fn dword_from_slice(bytes: &[u8], order: ByteOrder) -> Result<u32> {
    if bytes.len() < 4 {
        return Err(BitrigError::BufferTooShort { needed: 4, available: bytes.len() });
    }
    Ok(dword_from_dump(&[bytes[0], bytes[1], bytes[2], bytes[3]], order))
}

/// Length-checked variant of [`float_from_dump`], reading the first 4 bytes.
pub fn float_from_slice(bytes: &[u8], order: ByteOrder) -> Result<f32> {
    Ok(decode_float_bits(dword_from_slice(bytes, order)?))
}
