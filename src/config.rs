// In: src/config.rs

//! Configuration for the tick-rate helpers.
//!
//! `TickConfig` is created once at the application boundary (the CLI reads it from
//! a JSON file) and passed by reference into the `rate` functions. The codec itself
//! has no knowledge of units; only the duration conversions need a clock rate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, Ufloat8Error};

/// Timer frequency behind the Si114x measurement-rate registers (31.25 us per tick).
pub const DEFAULT_TICK_HZ: u32 = 32_000;

/// Describes the timer whose tick counts are being compressed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TickConfig {
    /// Timer frequency in ticks per second. Must be non-zero.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
        }
    }
}

impl TickConfig {
    pub fn new(tick_hz: u32) -> Result<Self> {
        let config = Self { tick_hz };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document such as `{"tick_hz": 32000}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TickConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading tick config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_hz == 0 {
            return Err(Ufloat8Error::InvalidConfig(
                "tick_hz must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to provide a default for `tick_hz`.
fn default_tick_hz() -> u32 {
    DEFAULT_TICK_HZ
}
