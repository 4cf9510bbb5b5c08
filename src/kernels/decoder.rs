//! This module contains the pure, stateless decoder for the 8-bit micro-float
//! format: one code byte in, one approximate 16-bit magnitude out.
//!
//! The decoder is total over all 256 codes and never fails. Below exponent 4 the
//! low fraction bits are shifted away (several codes share a magnitude); at and
//! above exponent 4 the five significant bits are exact and the low bits of the
//! result are zero-filled.

use crate::error::Ufloat8Error;
use crate::format::{self, DENORMAL_LIMIT, IMPLICIT_BIT, LINEAR_EXPONENT};
use crate::utils::typed_slice_to_bytes;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Expands a compressed code into its 16-bit magnitude.
///
/// ```
/// assert_eq!(ufloat8::uncompress(0x9A), 0x0340);
/// assert_eq!(ufloat8::uncompress(0xFF), 0xF800);
/// ```
#[inline]
pub const fn uncompress(code: u8) -> u16 {
    // Denormal with a fraction under one half rounds to zero.
    if code < DENORMAL_LIMIT {
        return 0;
    }

    let exponent = format::exponent(code);
    // The fraction arrives already scaled by 2^4, so the shift is relative to 4.
    let significand = IMPLICIT_BIT | format::fraction(code) as u16;

    if exponent >= LINEAR_EXPONENT {
        significand << (exponent - LINEAR_EXPONENT)
    } else {
        significand >> (LINEAR_EXPONENT - exponent)
    }
}

/// Every code's magnitude, indexed by code.
pub const DECODE_TABLE: [u16; 256] = build_decode_table();

const fn build_decode_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut code = 0usize;
    while code < 256 {
        table[code] = uncompress(code as u8);
        code += 1;
    }
    table
}

//==================================================================================
// 2. Public API for Slice Operations
//==================================================================================

/// Decodes a buffer of codes into native-endian `u16` bytes.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), Ufloat8Error> {
    log::trace!("decoder::decode: {} codes", input_bytes.len());

    let values = decode_to_vec(input_bytes);
    output_buf.clear();
    output_buf.extend_from_slice(&typed_slice_to_bytes(&values));

    log_metric!("event" = "decode", "codes" = input_bytes.len(), "out_bytes" = output_buf.len());
    Ok(())
}

/// Decodes a buffer of codes straight into magnitudes.
pub fn decode_to_vec(input_bytes: &[u8]) -> Vec<u16> {
    input_bytes
        .iter()
        .map(|&code| DECODE_TABLE[code as usize])
        .collect()
}
