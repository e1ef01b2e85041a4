//! Logging setup for binaries embedding the registry.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "student_registry=info,registry_server=info,tower_http=info";

/// Install the global fmt subscriber. `RUST_LOG` overrides `DEFAULT_FILTER`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
