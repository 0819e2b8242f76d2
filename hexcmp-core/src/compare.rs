use crate::error::{HexcmpError, Result};
use crate::hex::{binary_text, digit_value};
use crate::unit::{Granularity, Location};

use std::fmt;
use tracing::debug;

/// What to do when the two inputs differ in length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Fail with `LengthMismatch` before comparing anything.
    #[default]
    Strict,
    /// Report both lengths and stop without comparing.
    Lenient,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub position: usize,
    pub expected: u8,
    pub actual: u8,
    pub granularity: Granularity,
}

impl Mismatch {
    /// Hex digit of the expected side; only meaningful at nibble granularity.
    pub fn expected_digit(&self) -> Option<char> {
        self.digit(self.expected)
    }

    pub fn actual_digit(&self) -> Option<char> {
        self.digit(self.actual)
    }

    fn digit(&self, v: u8) -> Option<char> {
        match self.granularity {
            Granularity::Nibble => char::from_digit(v as u32, 16),
            _ => None,
        }
    }

    pub fn expected_binary(&self) -> String {
        binary_text(self.expected, self.granularity)
    }

    pub fn actual_binary(&self) -> String {
        binary_text(self.actual, self.granularity)
    }

    pub fn location(&self) -> Location {
        self.granularity.locate(self.position)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatchRate {
    Percent(f64),
    /// Both inputs were empty; there is nothing to take a percentage of.
    NoData,
}

impl fmt::Display for MatchRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // whole numbers keep one decimal place: 75.0, 100.0
            MatchRate::Percent(p) if p.fract() == 0.0 => write!(f, "{p:.1}"),
            // tiny rates switch to exponent form with a signed two-digit exponent
            MatchRate::Percent(p) if p.abs() < 1e-4 => {
                let sci = format!("{p:e}");
                let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            MatchRate::Percent(p) => write!(f, "{p}"),
            MatchRate::NoData => f.write_str("n/a (no data)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub granularity: Granularity,
    /// Number of units compared.
    pub total: usize,
    pub matches: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn rate(&self) -> MatchRate {
        if self.total == 0 {
            return MatchRate::NoData;
        }
        MatchRate::Percent(self.matches as f64 * 100.0 / self.total as f64)
    }

    pub fn is_identical(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Compared(Comparison),
    /// Lengths differ under `Mode::Lenient`; no units were compared.
    LengthMismatch {
        expected: usize,
        actual: usize,
        granularity: Granularity,
    },
}

impl Outcome {
    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            Outcome::Compared(c) => Some(c),
            Outcome::LengthMismatch { .. } => None,
        }
    }
}

fn check_lengths(
    expected: usize,
    actual: usize,
    mode: Mode,
    granularity: Granularity,
) -> Result<Option<Outcome>> {
    if expected == actual {
        return Ok(None);
    }
    match mode {
        Mode::Strict => Err(HexcmpError::LengthMismatch {
            expected,
            actual,
            unit: granularity.plural(),
        }),
        Mode::Lenient => Ok(Some(Outcome::LengthMismatch {
            expected,
            actual,
            granularity,
        })),
    }
}

/// Compare two hex strings digit by digit. Digits are compared by value, so
/// `A` and `a` match.
pub fn compare(expected_hex: &str, actual_hex: &str, mode: Mode) -> Result<Outcome> {
    let granularity = Granularity::Nibble;
    let total = expected_hex.chars().count();
    let actual_len = actual_hex.chars().count();
    if let Some(outcome) = check_lengths(total, actual_len, mode, granularity)? {
        return Ok(outcome);
    }
    debug!(total, "comparing hex digits");

    let mut matches = 0;
    let mut mismatches = Vec::new();
    for (position, (e, a)) in expected_hex.chars().zip(actual_hex.chars()).enumerate() {
        let expected = digit_value(position, e)?;
        let actual = digit_value(position, a)?;
        if expected == actual {
            matches += 1;
        } else {
            mismatches.push(Mismatch {
                position,
                expected,
                actual,
                granularity,
            });
        }
    }
    Ok(Outcome::Compared(Comparison {
        granularity,
        total,
        matches,
        mismatches,
    }))
}

/// Compare raw bytes at the given granularity. At `Granularity::Nibble` this
/// agrees with `compare` over the hex encodings.
pub fn compare_bytes(
    expected: &[u8],
    actual: &[u8],
    mode: Mode,
    granularity: Granularity,
) -> Result<Outcome> {
    let total = granularity.unit_count(expected.len());
    let actual_len = granularity.unit_count(actual.len());
    if let Some(outcome) = check_lengths(total, actual_len, mode, granularity)? {
        return Ok(outcome);
    }
    debug!(total, ?granularity, "comparing bytes");

    let mismatches: Vec<Mismatch> = mismatches(expected, actual, granularity).collect();
    Ok(Outcome::Compared(Comparison {
        granularity,
        total,
        matches: total - mismatches.len(),
        mismatches,
    }))
}

/// Lazily yields every differing unit. Inputs of unequal length are compared
/// over their common prefix.
pub fn mismatches<'a>(
    expected: &'a [u8],
    actual: &'a [u8],
    granularity: Granularity,
) -> Mismatches<'a> {
    Mismatches {
        expected,
        actual,
        granularity,
        position: 0,
        end: granularity.unit_count(expected.len().min(actual.len())),
    }
}

pub struct Mismatches<'a> {
    expected: &'a [u8],
    actual: &'a [u8],
    granularity: Granularity,
    position: usize,
    end: usize,
}

impl Iterator for Mismatches<'_> {
    type Item = Mismatch;

    fn next(&mut self) -> Option<Mismatch> {
        while self.position < self.end {
            let position = self.position;
            self.position += 1;
            let expected = self.granularity.unit_at(self.expected, position);
            let actual = self.granularity.unit_at(self.actual, position);
            if expected != actual {
                return Some(Mismatch {
                    position,
                    expected,
                    actual,
                    granularity: self.granularity,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.position))
    }
}
