use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "claim_recon=info";

/// Initializes console logging. `RUST_LOG` overrides the default `claim_recon=info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // Diagnostics go to stderr so the run summary on stdout stays clean
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
