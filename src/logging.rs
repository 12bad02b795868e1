//! Logging initialization for the CLI

use std::io::IsTerminal;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("sheetsum started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
