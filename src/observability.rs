//! Structured diagnostics for the slice kernels and rate helpers.
//!
//! The `log_metric!` macro emits one key/value line per call through the `log`
//! facade under the `ufloat8::metric` target, so it shows up wherever the host
//! has pointed its logger (the CLI uses `env_logger`). It is compiled out of
//! release builds entirely.

/// Logs a structured key-value metric at debug level, only in debug builds.
///
/// # Example
/// ```
/// use ufloat8::log_metric;
/// let codes = 4;
/// log_metric!("event" = "decode", "codes" = codes);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::__log::debug!(target: "ufloat8::metric", "UFLOAT8_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
