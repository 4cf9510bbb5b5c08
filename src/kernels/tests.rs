use super::*;
use crate::format::{self, ulp, MAX_MAGNITUDE};

/// Decoded low-exponent codes from the format documentation.
const LOW_EXPONENT_TABLE: &[(u8, u16)] = &[
    (0x00, 0x0000),
    (0x02, 0x0000),
    (0x08, 0x0001),
    (0x0A, 0x0001),
    (0x10, 0x0002),
    (0x14, 0x0002),
    (0x18, 0x0003),
    (0x1A, 0x0003),
    (0x20, 0x0004),
    (0x24, 0x0005),
    (0x28, 0x0006),
    (0x2C, 0x0007),
    (0x30, 0x0008),
    (0x32, 0x0009),
    (0x34, 0x000A),
    (0x36, 0x000B),
    (0x38, 0x000C),
    (0x3C, 0x000E),
    (0x3E, 0x000F),
];

#[test]
fn test_low_exponent_truncation_table() {
    for &(code, expected) in LOW_EXPONENT_TABLE {
        assert_eq!(uncompress(code), expected, "code {code:#04x}");
    }
}

#[test]
fn test_uncompress_is_monotonic() {
    let mut previous = 0u16;
    for code in 0..=u8::MAX {
        let magnitude = uncompress(code);
        assert!(magnitude >= previous, "code {code:#04x} decreased: {magnitude} < {previous}");
        previous = magnitude;
    }
    assert_eq!(previous, MAX_MAGNITUDE);
}

#[test]
fn test_compress_is_monotonic() {
    let mut previous = compress(0);
    for magnitude in 1..=u16::MAX {
        let code = compress(magnitude);
        assert!(code >= previous, "magnitude {magnitude} decreased: {code:#04x} < {previous:#04x}");
        previous = code;
    }
}

#[test]
fn test_near_inverse_within_one_ulp() {
    for magnitude in 0..=u16::MAX {
        let code = compress(magnitude);
        let decoded = uncompress(code);
        let error = magnitude.abs_diff(decoded);
        assert!(
            error <= ulp(code),
            "magnitude {magnitude}: code {code:#04x} decodes to {decoded}, error {error} > {}",
            ulp(code)
        );
    }
}

#[test]
fn test_exact_round_trip_up_to_linear_region() {
    // Exponents 0..=4 hold every significant bit of the input.
    for magnitude in 0..0x20u16 {
        assert_eq!(uncompress(compress(magnitude)), magnitude);
    }
}

#[test]
fn test_representable_magnitudes_are_fixed_points() {
    // Every value on the grid from exponent 1 up compresses back to a code that decodes to itself.
    for code in format::DENORMAL_LIMIT..=u8::MAX {
        let magnitude = uncompress(code);
        assert_eq!(uncompress(compress(magnitude)), magnitude, "code {code:#04x}");
    }
}

#[test]
fn test_carry_increments_exponent_by_one() {
    // Every magnitude whose rounding window is 0b111111 sits just under a power of two.
    for exponent in 5u32..15 {
        let magnitude = (0b111111u32 << (exponent - 5)) as u16;
        let code = compress(magnitude);
        assert_eq!(format::exponent(code) as u32, exponent + 1, "magnitude {magnitude:#06x}");
        assert_eq!(format::fraction(code), 0);
        assert_eq!(uncompress(code) as u32, 1 << (exponent + 1));
    }
}

#[test]
fn test_slice_kernels_agree_with_scalar_functions() {
    let magnitudes: Vec<u16> = (0..=u16::MAX).step_by(97).collect();
    let mut codes = Vec::new();
    encode(&magnitudes, &mut codes).unwrap();
    assert_eq!(codes.len(), magnitudes.len());

    let decoded = decode_to_vec(&codes);
    for ((&magnitude, &code), &value) in magnitudes.iter().zip(&codes).zip(&decoded) {
        assert_eq!(code, compress(magnitude));
        assert_eq!(value, uncompress(code));
    }
}
