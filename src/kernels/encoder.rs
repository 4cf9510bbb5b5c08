//! This module contains the pure, stateless encoder for the 8-bit micro-float
//! format: one 16-bit magnitude in, one code byte out.
//!
//! Normalization finds the highest set bit. Up to exponent 4 every significant
//! bit fits in the fraction and the value is packed as-is. From exponent 5 on,
//! the value is cut down to a 6-bit window (integer bit, four fraction bits and
//! one guard bit) and rounded to nearest, carrying into the exponent when the
//! window overflows.
//!
//! Ties near zero are broken towards the smallest code (0 -> 0x00, 1 -> 0x08),
//! which keeps the mapping bit-compatible with existing stored rates.

use crate::error::Ufloat8Error;
use crate::format::{self, MAX_CODE, MAX_EXPONENT};

/// Exponent from which the encoder has to round instead of truncate.
const ROUNDING_EXPONENT: u32 = 5;

/// Guard bit of the rounding window.
const GUARD_BIT: u32 = 0x01;

/// Adding this to the window increments the lowest kept fraction bit.
const ROUND_INCREMENT: u32 = 0x02;

/// Set once rounding has overflowed the window's integer bit.
const CARRY_BIT: u32 = 0x40;

//==================================================================================
// 1. Rounding Window
//==================================================================================

/// Rounds a `int | frac4 | guard` window to nearest on its guard bit.
///
/// Returns the (possibly incremented) exponent and the four kept fraction bits.
/// A window of `0b111111` rounds up into `0b1000000`, which becomes exponent + 1
/// with a zero fraction.
#[inline]
pub const fn round_window(exponent: u32, window: u32) -> (u32, u8) {
    let mut exponent = exponent;
    let mut window = window;

    if window & GUARD_BIT != 0 {
        window += ROUND_INCREMENT;
        if window & CARRY_BIT != 0 {
            exponent += 1;
            window >>= 1;
        }
    }

    (exponent, ((window >> 1) & format::FRACTION_MASK as u32) as u8)
}

//==================================================================================
// 2. Public API for Single-Value Operations
//==================================================================================

/// Compresses a 16-bit magnitude into its nearest code.
///
/// ```
/// // 500 ms of a 32 kHz timer.
/// assert_eq!(ufloat8::compress(16000), 0xDF);
/// ```
#[inline]
pub const fn compress(magnitude: u16) -> u8 {
    match magnitude {
        0 => return 0x00,
        1 => return format::DENORMAL_LIMIT,
        _ => {}
    }

    let input = magnitude as u32;
    let exponent = 15 - magnitude.leading_zeros();

    if exponent < ROUNDING_EXPONENT {
        // Left-align the bits under the leading one into the fraction nibble.
        let significand = input << (format::FRACTION_BITS - exponent);
        return format::pack(exponent as u8, significand as u8);
    }

    let window = input >> (exponent - ROUNDING_EXPONENT);
    let (exponent, fraction) = round_window(exponent, window);

    // Only 0xFC00..=0xFFFF carry past the top exponent; clamp them to the largest code.
    if exponent > MAX_EXPONENT as u32 {
        return MAX_CODE;
    }
    format::pack(exponent as u8, fraction)
}

//==================================================================================
// 3. Public API for Slice Operations
//==================================================================================

/// The public-facing encode function for a slice of magnitudes. One code byte per value.
pub fn encode(input_slice: &[u16], output_buf: &mut Vec<u8>) -> Result<(), Ufloat8Error> {
    log::trace!("encoder::encode: {} magnitudes", input_slice.len());

    output_buf.clear();
    output_buf.reserve(input_slice.len());
    output_buf.extend(input_slice.iter().map(|&magnitude| compress(magnitude)));

    log_metric!("event" = "encode", "values" = input_slice.len());
    Ok(())
}

/// Encodes a buffer of native-endian `u16` bytes.
pub fn encode_bytes(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), Ufloat8Error> {
    let width = std::mem::size_of::<u16>();
    if input_bytes.len() % width != 0 {
        return Err(Ufloat8Error::BufferMismatch(input_bytes.len(), width));
    }

    match bytemuck::try_cast_slice::<u8, u16>(input_bytes) {
        Ok(values) => encode(values, output_buf),
        Err(bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned) => {
            log::debug!("encoder::encode_bytes: unaligned input, copying {} bytes", input_bytes.len());
            let values: Vec<u16> = input_bytes
                .chunks_exact(width)
                .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
                .collect();
            encode(&values, output_buf)
        }
        Err(e) => Err(e.into()),
    }
}
