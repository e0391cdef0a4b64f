//! Opt-in tracing setup for hosts embedding `survey-facets`.
//!
//! The library only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts either wire their own subscriber or call one of these
//! helpers with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "survey_facets=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_DIRECTIVE)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"survey_facets=trace"` to see per-panel events.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
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
