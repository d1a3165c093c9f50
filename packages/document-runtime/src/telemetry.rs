//! Tracing setup for hosts embedding the runtime.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,document_runtime=debug,document_models=debug";

/// Install a global subscriber with an env filter and a fmt layer.
///
/// Returns `false` if a subscriber was already installed (e.g. by another
/// test in the same process); that is not an error.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
