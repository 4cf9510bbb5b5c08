// In: src/error.rs

//! This module defines the single, unified error type for the ufloat8 crate.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! The core `compress`/`uncompress` pair is total and never produces one of these;
//! errors only arise at the buffer, duration and configuration boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Ufloat8Error {
    // =========================================================================
    // === High-Level, Semantic Errors
    // =========================================================================
    /// A duration needs more timer ticks than a 16-bit magnitude can hold.
    #[error("Duration of {ticks} ticks exceeds the 16-bit tick range (max {max})", max = u16::MAX)]
    TickOverflow { ticks: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., config file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a `TickConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("Buffer length mismatch: got {0} bytes, expected a multiple of {1}")]
    BufferMismatch(usize, usize),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Ufloat8Error>;

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for Ufloat8Error {
    fn from(err: bytemuck::PodCastError) -> Self {
        Ufloat8Error::PodCast(err.to_string())
    }
}
