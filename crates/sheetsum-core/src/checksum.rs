//! Row-wise spreadsheet checksums.
//!
//! Two policies are supported:
//!
//! - [`ChecksumPolicy::Range`] sums `max - min` of every row ([`checksum1`])
//! - [`ChecksumPolicy::Divisible`] sums the quotient of every evenly
//!   divisible pair in every row ([`checksum2`])
//!
//! Both abort on the first malformed token and report overflow instead of
//! wrapping.

use crate::error::{Result, SheetsumError};
use crate::spreadsheet::{Spreadsheet, parse_spreadsheet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// How a row contributes to the checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumPolicy {
    Range,
    Divisible,
}

impl ChecksumPolicy {
    pub const ALL: [ChecksumPolicy; 2] = [ChecksumPolicy::Range, ChecksumPolicy::Divisible];

    pub fn name(self) -> &'static str {
        match self {
            ChecksumPolicy::Range => "range",
            ChecksumPolicy::Divisible => "divisible",
        }
    }

    fn row_value(self, values: &[i64]) -> Option<i64> {
        match self {
            ChecksumPolicy::Range => row_range(values),
            ChecksumPolicy::Divisible => row_quotients(values),
        }
    }

    /// Sum this policy's per-row contribution over a parsed sheet
    pub fn apply(self, sheet: &Spreadsheet) -> Result<i64> {
        let mut sum: i64 = 0;
        for row in sheet.rows() {
            let value = self
                .row_value(&row.values)
                .ok_or(SheetsumError::Overflow { line: row.line })?;
            trace!(policy = self.name(), line = row.line, value, "row contribution");
            sum = sum
                .checked_add(value)
                .ok_or(SheetsumError::Overflow { line: row.line })?;
        }
        debug!(policy = self.name(), rows = sheet.rows().len(), sum, "checksum computed");
        Ok(sum)
    }
}

impl fmt::Display for ChecksumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChecksumPolicy {
    type Err = SheetsumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "range" | "1" => Ok(ChecksumPolicy::Range),
            "divisible" | "2" => Ok(ChecksumPolicy::Divisible),
            _ => Err(SheetsumError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Difference between the largest and smallest value in a row.
///
/// An empty row contributes 0. Returns `None` on overflow.
pub fn row_range(values: &[i64]) -> Option<i64> {
    let Some((&first, rest)) = values.split_first() else {
        return Some(0);
    };
    let (min, max) = rest
        .iter()
        .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
    max.checked_sub(min)
}

/// Sum of `larger / smaller` over every pair of positions whose values
/// divide evenly.
///
/// On equal values the first one seen is the dividend. A zero divisor never
/// qualifies. Returns `None` on overflow.
pub fn row_quotients(values: &[i64]) -> Option<i64> {
    let mut sum: i64 = 0;
    for (i, &a1) in values.iter().enumerate() {
        for &a2 in &values[i + 1..] {
            let (n, d) = if a2 > a1 { (a2, a1) } else { (a1, a2) };
            if d == 0 {
                continue;
            }
            if n.checked_rem(d) == Some(0) {
                sum = sum.checked_add(n.checked_div(d)?)?;
            }
        }
    }
    Some(sum)
}

/// Parse `text` and checksum it under `policy`
pub fn checksum(text: &str, policy: ChecksumPolicy) -> Result<i64> {
    parse_spreadsheet(text)?.checksum(policy)
}

/// Sum of row ranges (`max - min`)
pub fn checksum1(text: &str) -> Result<i64> {
    checksum(text, ChecksumPolicy::Range)
}

/// Sum of evenly-divisible pair quotients
pub fn checksum2(text: &str) -> Result<i64> {
    checksum(text, ChecksumPolicy::Divisible)
}
