#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hex;
pub mod load;
pub mod report;
pub mod unit;

// Re-exports: stable API surface
pub use compare::{
    Comparison, MatchRate, Mismatch, Mismatches, Mode, Outcome, compare, compare_bytes,
    mismatches,
};
pub use error::{HexcmpError, Result};
pub use load::{load, load_and_encode};
pub use report::Reporter;
pub use unit::{Granularity, Half, Location};

use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Reference file; its contents are what the other file should hold.
pub const EXPECTED_FILE: &str = "INPUT.bin";
/// File under test.
pub const ACTUAL_FILE: &str = "OUTPUT.bin";

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub mode: Mode,
    pub granularity: Granularity,
    /// Print both hex dumps before comparing.
    pub dump: bool,
    pub limit: Option<usize>,
    pub locate: bool,
}

/// Compare `dir/INPUT.bin` against `dir/OUTPUT.bin` and write the report to
/// `out`. Strict length mismatches come back as `Err` after any dump lines.
pub fn run_in<W: Write>(dir: &Path, opts: &RunOptions, out: W) -> Result<Outcome> {
    let expected_path = dir.join(EXPECTED_FILE);
    let actual_path = dir.join(ACTUAL_FILE);

    let mut reporter = Reporter::new(out)
        .with_limit(opts.limit)
        .with_locate(opts.locate);

    let outcome = match opts.granularity {
        Granularity::Nibble => {
            let expected_hex = load_and_encode(&expected_path)?;
            let actual_hex = load_and_encode(&actual_path)?;
            if opts.dump {
                reporter.dump("Expected", &expected_hex)?;
                reporter.dump("Actual", &actual_hex)?;
            }
            compare(&expected_hex, &actual_hex, opts.mode)?
        }
        granularity => {
            let expected = load(&expected_path)?;
            let actual = load(&actual_path)?;
            if opts.dump {
                reporter.dump("Expected", &hex::encode(&expected))?;
                reporter.dump("Actual", &hex::encode(&actual))?;
            }
            compare_bytes(&expected, &actual, opts.mode, granularity)?
        }
    };

    match &outcome {
        Outcome::Compared(c) => {
            reporter.mismatches(c)?;
            reporter.summary(c)?;
            info!(
                matches = c.matches,
                total = c.total,
                mismatches = c.mismatches.len(),
                "comparison finished"
            );
        }
        Outcome::LengthMismatch {
            expected,
            actual,
            granularity,
        } => {
            warn!(expected, actual, "lengths differ; nothing compared");
            reporter.length_mismatch(*expected, *actual, *granularity)?;
        }
    }
    Ok(outcome)
}
