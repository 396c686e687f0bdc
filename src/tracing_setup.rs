//! Logging setup
//!
//! Console logging through `tracing-subscriber`, filtered by `RUST_LOG`.
//! The server logs to stdout at `info` by default; the CLIs log to stderr at
//! `warn` so their stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Initialize console logging for the server
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: tests and embedders may have installed a subscriber already
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// Initialize stderr logging for the command-line tools
pub fn init_cli_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
