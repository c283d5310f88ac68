//! 8-bit tier: bit access, rotation, mirroring, inversion.
//!
//! This is the leaf tier: the word tier splits into two bytes and delegates
//! here, and the double-word tier splits into two words. Bit indices and
//! rotation counts accept any `i32` and are reduced with Euclidean modulo,
//! so negative values wrap into `0..8`.

/// Get the value of bit `index mod 8`.
#[inline]
pub fn get_bit(byte: u8, index: i32) -> bool {
    (byte >> index.rem_euclid(8)) & 0x01 == 0x01
}

/// Return `byte` with bit `index mod 8` forced to `value`; all other bits
/// unchanged.
#[inline]
pub fn set_bit(byte: u8, index: i32, value: bool) -> u8 {
    let mask = 1u8 << index.rem_euclid(8);
    if value {
        byte | mask
    } else {
        byte & !mask
    }
}

/// Rotate left by `bits mod 8` positions.
///
/// Widens to u16, shifts, then folds the overflow byte back in. Branch-free
/// and well-defined for any count; multiples of 8 are the identity.
#[inline]
pub fn rotate_left(byte: u8, bits: i32) -> u8 {
    let w = u16::from(byte) << bits.rem_euclid(8);
    (w as u8) ^ ((w >> 8) as u8)
}

/// Rotate right by `bits mod 8` positions.
#[inline]
pub fn rotate_right(byte: u8, bits: i32) -> u8 {
    let w = (u16::from(byte) << 8) >> bits.rem_euclid(8);
    (w as u8) ^ ((w >> 8) as u8)
}

/// Mirror the bit order: bit `i` of the result is bit `7 - i` of the input.
pub fn reverse_bits(byte: u8) -> u8 {
    let mut out = 0x00;
    for index in 0..8 {
        out = set_bit(out, 7 - index, get_bit(byte, index));
    }
    out
}

/// Complement every bit.
///
/// Defined per-bit through `get_bit`/`set_bit` so all three tiers share the
/// same indexing contract; the result equals `!byte`.
pub fn invert_bits(byte: u8) -> u8 {
    let mut out = 0x00;
    for index in 0..8 {
        out = set_bit(out, index, !get_bit(byte, index));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit_known_values() {
        assert!(get_bit(9, 0));
        assert!(!get_bit(8, 5));
        assert!(get_bit(189, 7));
        assert!(get_bit(8, 3));
    }

    #[test]
    fn test_get_bit_index_wraparound() {
        let byte = 0b1000_0001;
        assert!(get_bit(byte, 8)); // wraps to bit 0
        assert!(get_bit(byte, 15)); // wraps to bit 7
        assert!(get_bit(byte, -1)); // wraps to bit 7
        assert!(!get_bit(byte, -2)); // wraps to bit 6
    }

    #[test]
    fn test_set_bit_forces_value() {
        assert_eq!(set_bit(52, 7, true), 180);
        // Setting an already-set bit must be a no-op, not a toggle.
        assert_eq!(set_bit(180, 7, true), 180);
        assert_eq!(set_bit(180, 7, false), 52);
        assert_eq!(set_bit(52, 7, false), 52);
    }

    #[test]
    fn test_set_bit_leaves_other_bits() {
        let byte = 0b1010_1010;
        let updated = set_bit(byte, 0, true);
        for index in 1..8 {
            assert_eq!(get_bit(updated, index), get_bit(byte, index));
        }
    }

    #[test]
    fn test_rotate_known_values() {
        assert_eq!(rotate_left(240, 5), 30);
        assert_eq!(rotate_right(240, 5), 135);
    }

    #[test]
    fn test_rotate_width_multiples_are_identity() {
        for byte in [0x00, 0x01, 0x80, 0xAA, 0xF0, 0xFF] {
            assert_eq!(rotate_left(byte, 0), byte);
            assert_eq!(rotate_left(byte, 8), byte);
            assert_eq!(rotate_right(byte, 8), byte);
            assert_eq!(rotate_left(byte, -8), byte);
        }
    }

    #[test]
    fn test_rotate_negative_count() {
        // -3 wraps to 5 under Euclidean modulo.
        assert_eq!(rotate_left(240, -3), rotate_left(240, 5));
        assert_eq!(rotate_right(240, -3), rotate_right(240, 5));
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(1), 128);
        assert_eq!(reverse_bits(0b1100_0000), 0b0000_0011);
        assert_eq!(reverse_bits(0b1010_0000), 0b0000_0101);
    }

    #[test]
    fn test_invert_bits_matches_complement() {
        for byte in [0x00, 0x0F, 0x55, 0xAA, 0xFF] {
            assert_eq!(invert_bits(byte), !byte);
        }
    }
}
