use std::path::Path;

use hexcmp_core::error::Result;
use hexcmp_core::{ACTUAL_FILE, EXPECTED_FILE, Outcome, RunOptions, run_in};
use tracing::{debug, info};

pub fn handle_compare(opts: RunOptions) -> Result<()> {
    debug!(?opts, expected = EXPECTED_FILE, actual = ACTUAL_FILE, "starting");
    let out = std::io::stdout().lock();
    match run_in(Path::new("."), &opts, out)? {
        Outcome::Compared(c) if c.is_identical() => info!("files match"),
        Outcome::Compared(c) => info!(mismatches = c.mismatches.len(), "files differ"),
        Outcome::LengthMismatch { .. } => info!("length mismatch tolerated"),
    }
    Ok(())
}
