//! 16-bit tier: composition from bytes plus bit access, rotation, mirroring,
//! inversion.
//!
//! A word is a high byte (bits 8-15) over a low byte (bits 0-7). Bit access
//! reduces the index modulo 16 and delegates into the byte tier on the
//! matching half.

use super::byte;

/// Truncating extraction of the least-significant byte.
#[inline]
pub fn low_byte(word: u16) -> u8 {
    word as u8
}

/// Truncating extraction of bits 8-15.
#[inline]
pub fn high_byte(word: u16) -> u8 {
    (word >> 8) as u8
}

/// Assemble a word from its two halves: `(high << 8) | low`.
///
/// Exact inverse of [`low_byte`]/[`high_byte`].
#[inline]
pub fn from_bytes(high: u8, low: u8) -> u16 {
    (u16::from(high) << 8) | u16::from(low)
}

/// Get the value of bit `index mod 16`.
pub fn get_bit(word: u16, index: i32) -> bool {
    let index = index.rem_euclid(16);
    if index >= 8 {
        byte::get_bit(high_byte(word), index - 8)
    } else {
        byte::get_bit(low_byte(word), index)
    }
}

/// Return `word` with bit `index mod 16` forced to `value`.
pub fn set_bit(word: u16, index: i32, value: bool) -> u16 {
    let index = index.rem_euclid(16);
    if index >= 8 {
        from_bytes(byte::set_bit(high_byte(word), index - 8, value), low_byte(word))
    } else {
        from_bytes(high_byte(word), byte::set_bit(low_byte(word), index, value))
    }
}

/// Exchange the high and low bytes.
#[inline]
pub fn swap_bytes(word: u16) -> u16 {
    from_bytes(low_byte(word), high_byte(word))
}

/// Rotate left by `bits mod 16` positions (u32 scratch, overflow folded back).
#[inline]
pub fn rotate_left(word: u16, bits: i32) -> u16 {
    let d = u32::from(word) << bits.rem_euclid(16);
    (d as u16) ^ ((d >> 16) as u16)
}

/// Rotate right by `bits mod 16` positions.
#[inline]
pub fn rotate_right(word: u16, bits: i32) -> u16 {
    let d = (u32::from(word) << 16) >> bits.rem_euclid(16);
    (d as u16) ^ ((d >> 16) as u16)
}

/// Mirror the full 16-bit order: bit `i` of the result is bit `15 - i` of the
/// input. This is a whole-word mirror, not a byte swap with per-byte reverse.
pub fn reverse_bits(word: u16) -> u16 {
    let mut out = 0x0000;
    for index in 0..16 {
        out = set_bit(out, 15 - index, get_bit(word, index));
    }
    out
}

/// Complement every bit, composed from byte-tier inversion of each half.
pub fn invert_bits(word: u16) -> u16 {
    from_bytes(byte::invert_bits(high_byte(word)), byte::invert_bits(low_byte(word)))
}
