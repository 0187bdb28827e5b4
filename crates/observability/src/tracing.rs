//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: quiet overall, but keep the
/// service-layer operation logs (line appends, shipments) visible.
const DEFAULT_DIRECTIVES: &str = "info,tradepost_service=debug";

/// Initialize tracing/logging for the process.
///
/// Emits JSON lines, filtered through `RUST_LOG` when set. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
