// In: src/format.rs

//! The bit layout shared by the encoder and the decoder.
//!
//! A compressed code is one byte:
//!
//! ```text
//! | b7 b6 b5 b4 | b3 b2 b1 b0 |
//! |  exponent   |  fraction   |
//! ```
//!
//! and represents `2^exponent * 1.fraction`, with the implicit integer bit
//! dropped to 0 when the exponent field is zero (the denormal region). The
//! largest exponent is an ordinary finite value; there is no infinity or NaN.

//==================================================================================
// 1. Layout Constants
//==================================================================================

/// Number of fraction bits stored in a code.
pub const FRACTION_BITS: u32 = 4;

/// Shift that moves the exponent field into the low nibble.
pub const EXPONENT_SHIFT: u32 = FRACTION_BITS;

/// Mask selecting the fraction field of a code.
pub const FRACTION_MASK: u8 = 0x0F;

/// Value of the implicit integer bit once the fraction is placed in the low nibble.
pub const IMPLICIT_BIT: u16 = 0x10;

/// Codes below this decode to zero: exponent 0 with a fraction under one half.
pub const DENORMAL_LIMIT: u8 = 0x08;

/// Largest exponent a code can carry.
pub const MAX_EXPONENT: u8 = 15;

/// Exponent at or above which the decoder shifts left, i.e. no fraction bit is lost.
pub const LINEAR_EXPONENT: u8 = 4;

/// The largest code and the magnitude it decodes to.
pub const MAX_CODE: u8 = 0xFF;
pub const MAX_MAGNITUDE: u16 = 0xF800;

//==================================================================================
// 2. Field Helpers
//==================================================================================

/// Extracts the exponent field (0..=15).
#[inline]
pub const fn exponent(code: u8) -> u8 {
    code >> EXPONENT_SHIFT
}

/// Extracts the fraction field (0..=15).
#[inline]
pub const fn fraction(code: u8) -> u8 {
    code & FRACTION_MASK
}

/// Packs an exponent and a fraction into a code. Bits outside each field are dropped.
#[inline]
pub const fn pack(exponent: u8, fraction: u8) -> u8 {
    ((exponent & 0x0F) << EXPONENT_SHIFT) | (fraction & FRACTION_MASK)
}

/// The spacing of the representable grid at this code's exponent: `2^max(exponent - 4, 0)`.
///
/// A magnitude compressed to `code` decodes to within one `ulp(code)` of itself.
#[inline]
pub const fn ulp(code: u8) -> u16 {
    let e = exponent(code);
    if e > LINEAR_EXPONENT {
        1 << (e - LINEAR_EXPONENT)
    } else {
        1
    }
}
