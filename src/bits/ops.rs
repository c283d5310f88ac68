//! Method-call sugar over the width-tier functions.
//!
//! `value.bit(i)`, `value.rol(n)` and friends read better than the module
//! paths at call sites that mix widths. Pure delegation; indices and counts
//! wrap modulo the operand width exactly as the free functions do.

use super::{byte, dword, word};

/// Bit test, bit write, and rotation for the three supported widths.
pub trait BitOps: Copy {
    /// Test bit `index mod WIDTH`.
    fn bit(self, index: i32) -> bool;

    /// Return self with bit `index mod WIDTH` forced to `value`.
    fn with_bit(self, index: i32, value: bool) -> Self;

    /// Rotate left by `bits mod WIDTH` positions.
    fn rol(self, bits: i32) -> Self;

    /// Rotate right by `bits mod WIDTH` positions.
    fn ror(self, bits: i32) -> Self;
}

impl BitOps for u8 {
    #[inline]
    fn bit(self, index: i32) -> bool {
        byte::get_bit(self, index)
    }

    #[inline]
    fn with_bit(self, index: i32, value: bool) -> Self {
        byte::set_bit(self, index, value)
    }

    #[inline]
    fn rol(self, bits: i32) -> Self {
        byte::rotate_left(self, bits)
    }

    #[inline]
    fn ror(self, bits: i32) -> Self {
        byte::rotate_right(self, bits)
    }
}

impl BitOps for u16 {
    #[inline]
    fn bit(self, index: i32) -> bool {
        word::get_bit(self, index)
    }

    #[inline]
    fn with_bit(self, index: i32, value: bool) -> Self {
        word::set_bit(self, index, value)
    }

    #[inline]
    fn rol(self, bits: i32) -> Self {
        word::rotate_left(self, bits)
    }

    #[inline]
    fn ror(self, bits: i32) -> Self {
        word::rotate_right(self, bits)
    }
}

impl BitOps for u32 {
    #[inline]
    fn bit(self, index: i32) -> bool {
        dword::get_bit(self, index)
    }

    #[inline]
    fn with_bit(self, index: i32, value: bool) -> Self {
        dword::set_bit(self, index, value)
    }

    #[inline]
    fn rol(self, bits: i32) -> Self {
        dword::rotate_left(self, bits)
    }

    #[inline]
    fn ror(self, bits: i32) -> Self {
        dword::rotate_right(self, bits)
    }
}
