// src/shared/telemetry.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber for the embedding shell.
///
/// Honors `RUST_LOG`; defaults to `info` with request-level detail
/// from this crate.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_admin_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
