pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use hexcmp_core::error::Result;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    handlers::handle_compare(cli.run_options())
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over
/// the -v/-q level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
