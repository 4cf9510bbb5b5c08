//! This file is the root of the `ufloat8` Rust crate.
//!
//! `ufloat8` packs unsigned 16-bit magnitudes (typically timer tick counts) into a
//! single byte using a micro-float layout: a 4-bit exponent, a 4-bit fraction with
//! an implicit leading one, and a denormal region that covers zero.
//!
//! ```
//! let code = ufloat8::compress(16000);
//! assert_eq!(code, 0xDF);
//! assert_eq!(ufloat8::uncompress(code), 15872);
//! ```
//!
//! Its responsibilities are strictly limited to declaring the modules of the library
//! and re-exporting the entry points most callers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod error;
pub mod format;
pub mod kernels;
pub mod rate;
pub mod utils;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::TickConfig;
pub use error::{Result, Ufloat8Error};
pub use kernels::{compress, uncompress};

#[doc(hidden)]
pub use log as __log;
