use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug,sqlx=warn";

/// Initialize structured JSON tracing on stdout. Call once at service startup.
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Subsequent calls are silently ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
