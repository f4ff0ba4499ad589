//! Creates the `tracing_subscriber` registry used when the
//! `tracing` feature is enabled.
//!
//! Filtering follows the usual environment variable:
//! ```bash
//! RUST_LOG=geopoints=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// Records emitted through the `log` facade are forwarded
/// into the same subscriber.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
