//! Process-wide log subscriber for the CLI

use tracing_subscriber::{EnvFilter, fmt};

/// Install the `tracing` subscriber.
///
/// Without `-v`, `RUST_LOG` decides and falls back to `warn`. Each `-v` raises
/// the level: info, debug, trace.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A second call in the same process keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
