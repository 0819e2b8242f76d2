use crate::compare::{Comparison, Mismatch};
use crate::error::Result;
use crate::unit::Granularity;

use std::io::Write;

/// Writes the human-readable report lines.
pub struct Reporter<W: Write> {
    out: W,
    limit: Option<usize>,
    locate: bool,
    shown: usize,
    suppressed: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            limit: None,
            locate: false,
            shown: 0,
            suppressed: 0,
        }
    }

    /// Cap the number of mismatch lines written.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Append the byte/nibble/bit location to each mismatch line.
    pub fn with_locate(mut self, locate: bool) -> Self {
        self.locate = locate;
        self
    }

    pub fn dump(&mut self, label: &str, hex: &str) -> Result<()> {
        writeln!(self.out, "{label}: {hex}")?;
        Ok(())
    }

    pub fn mismatch(&mut self, m: &Mismatch) -> Result<()> {
        if self.limit.is_some_and(|l| self.shown >= l) {
            self.suppressed += 1;
            return Ok(());
        }
        self.shown += 1;
        write!(
            self.out,
            "Incorrect: {}-th {} ({} vs {})",
            m.position,
            m.granularity.unit_name(),
            m.expected_binary(),
            m.actual_binary()
        )?;
        if self.locate {
            write!(self.out, " at {}", m.location())?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn mismatches(&mut self, c: &Comparison) -> Result<()> {
        for m in &c.mismatches {
            self.mismatch(m)?;
        }
        if self.suppressed > 0 {
            writeln!(
                self.out,
                "... {} more mismatches not shown",
                self.suppressed
            )?;
        }
        Ok(())
    }

    pub fn length_mismatch(
        &mut self,
        expected: usize,
        actual: usize,
        granularity: Granularity,
    ) -> Result<()> {
        let unit = granularity.plural();
        writeln!(
            self.out,
            "Length mismatch: expected {expected} {unit}, actual {actual} {unit}"
        )?;
        Ok(())
    }

    pub fn summary(&mut self, c: &Comparison) -> Result<()> {
        writeln!(self.out, "Correction rate: {}", c.rate())?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
