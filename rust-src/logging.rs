//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;


/// Map `-v` occurrences to a default level.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}


/// Install the stderr subscriber. `RUST_LOG` wins over `verbosity`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
