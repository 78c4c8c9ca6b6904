//! Opt-in tracing setup for hosts embedding a bar chart.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the application. These helpers exist for demos and small hosts that do not
//! want to wire `tracing-subscriber` themselves.

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_DIRECTIVE`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_DIRECTIVE)
}

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive` (for example `"bar_chart_rs=trace"`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing_with_fallback};

    #[test]
    fn tracing_helpers_are_noops_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_fallback("debug"));
    }
}
