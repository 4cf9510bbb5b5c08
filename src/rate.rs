//! Duration helpers for timers whose periods are stored as compressed tick counts.
//!
//! A wake-up period is converted to ticks of the configured clock, rounded to the
//! nearest tick, and then squeezed into one byte with [`compress`]. Reading it back
//! goes the other way and yields the duration the hardware will actually use, which
//! can differ from the requested one by up to one grid step.
//!
//! ```
//! use std::time::Duration;
//! use ufloat8::{rate, TickConfig};
//!
//! let config = TickConfig::default();
//! let code = rate::compress_duration(Duration::from_millis(500), &config).unwrap();
//! assert_eq!(code, 0xDF);
//! assert_eq!(rate::uncompress_duration(code, &config), Duration::from_millis(496));
//! ```

use std::time::Duration;

use crate::config::TickConfig;
use crate::error::{Result, Ufloat8Error};
use crate::format::MAX_CODE;
use crate::kernels::{compress, uncompress};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Converts a duration into the nearest whole number of ticks.
pub fn duration_to_ticks(duration: Duration, config: &TickConfig) -> Result<u16> {
    config.validate()?;

    let scaled = duration.as_nanos() * config.tick_hz as u128;
    let ticks = (scaled + NANOS_PER_SEC / 2) / NANOS_PER_SEC;

    u16::try_from(ticks).map_err(|_| Ufloat8Error::TickOverflow {
        ticks: u64::try_from(ticks).unwrap_or(u64::MAX),
    })
}

/// Converts a tick count into a duration, rounded to the nearest nanosecond.
///
/// A zero `tick_hz` is treated as one tick per second rather than dividing by zero;
/// validated configs never hit that path.
pub fn ticks_to_duration(ticks: u16, config: &TickConfig) -> Duration {
    let hz = config.tick_hz.max(1) as u128;
    let nanos = (ticks as u128 * NANOS_PER_SEC + hz / 2) / hz;
    // At most 65535 s worth of nanoseconds, well inside u64.
    Duration::from_nanos(nanos as u64)
}

/// Compresses a duration into a single rate byte.
pub fn compress_duration(duration: Duration, config: &TickConfig) -> Result<u8> {
    let ticks = duration_to_ticks(duration, config)?;
    let code = compress(ticks);
    log::debug!(
        "compress_duration: {:?} -> {} ticks @ {} Hz -> {:#04x}",
        duration,
        ticks,
        config.tick_hz,
        code
    );
    log_metric!("event" = "compress_duration", "ticks" = ticks, "code" = code);
    Ok(code)
}

/// Expands a rate byte back into the duration it represents.
pub fn uncompress_duration(code: u8, config: &TickConfig) -> Duration {
    ticks_to_duration(uncompress(code), config)
}

/// Longest duration a rate byte can hold at this clock rate.
pub fn max_duration(config: &TickConfig) -> Duration {
    uncompress_duration(MAX_CODE, config)
}
