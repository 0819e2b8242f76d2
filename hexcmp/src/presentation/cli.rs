use clap::{ArgAction, Parser, ValueEnum};
use hexcmp_core::{Granularity, Mode, RunOptions};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare INPUT.bin (expected) against OUTPUT.bin (actual) as hex digits",
    long_about = None
)]
pub struct Cli {
    /// What to do when the files differ in length
    #[arg(long, value_enum, default_value_t = ModeArg::Strict)]
    pub mode: ModeArg,

    /// Unit compared at each position
    #[arg(long, value_enum, default_value_t = GranularityArg::Nibble)]
    pub granularity: GranularityArg,

    /// Print both full hex dumps before comparing
    #[arg(long)]
    pub dump: bool,

    /// Print at most this many mismatch lines
    #[arg(long)]
    pub limit: Option<usize>,

    /// Append the byte (and nibble or bit) of each mismatch
    #[arg(long)]
    pub locate: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Fail on a length mismatch
    Strict,
    /// Report the lengths and exit successfully
    Lenient,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Byte,
    Nibble,
    Bit,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Strict => Mode::Strict,
            ModeArg::Lenient => Mode::Lenient,
        }
    }
}

impl From<GranularityArg> for Granularity {
    fn from(g: GranularityArg) -> Self {
        match g {
            GranularityArg::Byte => Granularity::Byte,
            GranularityArg::Nibble => Granularity::Nibble,
            GranularityArg::Bit => Granularity::Bit,
        }
    }
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            mode: self.mode.into(),
            granularity: self.granularity.into(),
            dump: self.dump,
            limit: self.limit,
            locate: self.locate,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_are_strict_nibble() {
        let cli = Cli::parse_from(["hexcmp"]);
        let opts = cli.run_options();
        assert_eq!(opts.mode, Mode::Strict);
        assert_eq!(opts.granularity, Granularity::Nibble);
        assert!(!opts.dump);
        assert_eq!(opts.limit, None);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from([
            "hexcmp",
            "--mode",
            "lenient",
            "--granularity",
            "bit",
            "--dump",
            "--limit",
            "5",
            "--locate",
            "-vv",
        ]);
        let opts = cli.run_options();
        assert_eq!(opts.mode, Mode::Lenient);
        assert_eq!(opts.granularity, Granularity::Bit);
        assert!(opts.dump && opts.locate);
        assert_eq!(opts.limit, Some(5));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["hexcmp", "-q", "-v"]).is_err());
        assert_eq!(Cli::parse_from(["hexcmp", "-q"]).log_level(), "error");
    }
}
