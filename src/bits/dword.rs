//! 32-bit tier: composition from words plus bit access, rotation, mirroring,
//! inversion.
//!
//! Mirrors the word tier one level up: a double word is a high word
//! (bits 16-31) over a low word (bits 0-15), and bit access reduces the index
//! modulo 32 before delegating into the word tier.

use super::word;

/// Truncating extraction of the least-significant word.
#[inline]
pub fn low_word(dword: u32) -> u16 {
    dword as u16
}

/// Truncating extraction of bits 16-31.
#[inline]
pub fn high_word(dword: u32) -> u16 {
    (dword >> 16) as u16
}

/// Assemble a double word from its two halves: `(high << 16) | low`.
///
/// Exact inverse of [`low_word`]/[`high_word`].
#[inline]
pub fn from_words(high: u16, low: u16) -> u32 {
    (u32::from(high) << 16) | u32::from(low)
}

/// Get the value of bit `index mod 32`.
pub fn get_bit(dword: u32, index: i32) -> bool {
    let index = index.rem_euclid(32);
    if index >= 16 {
        word::get_bit(high_word(dword), index - 16)
    } else {
        word::get_bit(low_word(dword), index)
    }
}

/// Return `dword` with bit `index mod 32` forced to `value`.
pub fn set_bit(dword: u32, index: i32, value: bool) -> u32 {
    let index = index.rem_euclid(32);
    if index >= 16 {
        from_words(word::set_bit(high_word(dword), index - 16, value), low_word(dword))
    } else {
        from_words(high_word(dword), word::set_bit(low_word(dword), index, value))
    }
}

/// Exchange the high and low words.
#[inline]
pub fn swap_words(dword: u32) -> u32 {
    from_words(low_word(dword), high_word(dword))
}

/// Rotate left by `bits mod 32` positions (u64 scratch, overflow folded back).
#[inline]
pub fn rotate_left(dword: u32, bits: i32) -> u32 {
    let q = u64::from(dword) << bits.rem_euclid(32);
    (q as u32) ^ ((q >> 32) as u32)
}

/// Rotate right by `bits mod 32` positions.
#[inline]
pub fn rotate_right(dword: u32, bits: i32) -> u32 {
    let q = (u64::from(dword) << 32) >> bits.rem_euclid(32);
    (q as u32) ^ ((q >> 32) as u32)
}

/// Mirror the full 32-bit order: bit `i` of the result is bit `31 - i` of the
/// input.
pub fn reverse_bits(dword: u32) -> u32 {
    let mut out = 0x0000_0000;
    for index in 0..32 {
        out = set_bit(out, 31 - index, get_bit(dword, index));
    }
    out
}

/// Complement every bit, composed from word-tier inversion of each half.
pub fn invert_bits(dword: u32) -> u32 {
    from_words(word::invert_bits(high_word(dword)), word::invert_bits(low_word(dword)))
}
