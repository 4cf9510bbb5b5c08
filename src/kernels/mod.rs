//! This module serves as the public API for the pure, stateless micro-float kernels.
//!
//! It declares the encoder and decoder sub-modules and re-exports their scalar and
//! slice entry points. The scalar pair (`compress`/`uncompress`) is `const`, total
//! and allocation-free; the slice functions work on caller-provided buffers in the
//! same shape as the rest of the crate's kernels.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Magnitude -> code, with round-to-nearest above exponent 4.
pub mod encoder;

/// Code -> magnitude.
pub mod decoder;

//==================================================================================
// 2. Public API
//==================================================================================

pub use decoder::{decode, decode_to_vec, uncompress, DECODE_TABLE};
pub use encoder::{compress, encode, encode_bytes, round_window};

#[cfg(test)]
mod tests;
