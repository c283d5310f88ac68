//! Manual IEEE-754 single-precision reconstruction.
//!
//! `decode_float_bits` rebuilds the float arithmetically from its sign,
//! exponent, and mantissa fields instead of reinterpret-casting, so every
//! step of the decode can be audited (and traced). Two deliberate
//! divergences from a standards-compliant decode are kept from the
//! reference behavior:
//!
//! - Any all-ones exponent field yields NaN. The NaN guard compares the
//!   mantissa sum against zero, but the sum includes the implicit leading
//!   1.0, so the infinity patterns (`0x7F800000`/`0xFF800000`) also decode
//!   to NaN.
//! - Denormals (exponent field 0) keep the implicit leading 1.0 and are
//!   decoded as if normalized, which overstates their magnitude.

use tracing::trace;

use crate::bits::dword;

/// IEEE-754 bias for the single-precision exponent field.
const EXPONENT_BIAS: i32 = 127;

/// Decode a raw 32-bit pattern into the float it represents.
///
/// Total: every input produces an f32, possibly NaN. See the module docs for
/// the NaN and denormal policy.
pub fn decode_float_bits(bits: u32) -> f32 {
    let sign: f64 = if dword::get_bit(bits, 31) { -1.0 } else { 1.0 };

    // Raw 8-bit exponent field, bits 23..=30, as an integer in 0..=255.
    let mut exponent: i32 = 0;
    for index in 23..=30 {
        if dword::get_bit(bits, index) {
            exponent += 1 << (index - 23);
        }
    }

    // Implicit leading bit plus the fractional sum over bits 0..=22.
    let mut mantissa: f64 = 1.0;
    for index in 0..=22 {
        if dword::get_bit(bits, index) {
            mantissa += 1.0 / f64::from(1u32 << (23 - index));
        }
    }

    trace!(
        bits = %format_args!("{bits:#010x}"),
        exponent,
        mantissa,
        "decoded IEEE-754 fields"
    );

    if exponent == 255 && mantissa > 0.0 {
        return f32::NAN;
    }

    (sign * f64::from(exponent - EXPONENT_BIAS).exp2() * mantissa) as f32
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_decode_normal_values() {
        assert_eq!(decode_float_bits(0x3F80_0000), 1.0);
        assert_eq!(decode_float_bits(0xBF80_0000), -1.0);
        assert_eq!(decode_float_bits(0x41C8_0000), 25.0);
        assert_eq!(decode_float_bits(0xC2C8_0000), -100.0);
        assert!((decode_float_bits(0x4049_0FDB) - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_decode_known_dump_value() {
        let value = decode_float_bits(0xC3C0_9400);
        assert!(value > -390.0 && value < -385.0);
        assert_eq!(value, -385.15625);
    }

    #[test]
    fn test_decode_nan_patterns() {
        assert!(decode_float_bits(0x7FC0_0000).is_nan());
        assert!(decode_float_bits(0xFFC0_0000).is_nan());
        assert!(decode_float_bits(0x7F80_0001).is_nan());
        // The infinity patterns also land in the NaN guard because the
        // mantissa sum includes the implicit 1.0.
        assert!(decode_float_bits(0x7F80_0000).is_nan());
        assert!(decode_float_bits(0xFF80_0000).is_nan());
    }

    #[test]
    fn test_decode_zero_keeps_implicit_bit() {
        // All-zero bits decode to 2^-127, not 0.0: the implicit leading 1.0
        // is applied even for the denormal exponent field.
        let value = decode_float_bits(0x0000_0000);
        assert!(value > 0.0);
        assert_eq!(value, 2.0f64.powi(-127) as f32);

        let value = decode_float_bits(0x8000_0000);
        assert!(value < 0.0);
    }

    #[test]
    fn test_decode_roundtrip_against_native() {
        // Normal-range patterns must agree with the native reinterpretation.
        for expected in [0.5f32, 1.5, 2.0, 3.25, -0.125, 1234.5678, -9.8765e30] {
            assert_eq!(decode_float_bits(expected.to_bits()), expected);
        }
    }

    #[traced_test]
    #[test]
    fn test_decode_emits_field_trace() {
        let _ = decode_float_bits(0x41C8_0000);
        assert!(logs_contain("decoded IEEE-754 fields"));
    }
}
