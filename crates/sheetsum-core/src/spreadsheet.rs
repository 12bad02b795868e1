//! Parser for whitespace-separated integer spreadsheets

use crate::checksum::ChecksumPolicy;
use crate::error::{Result, SheetsumError};
use std::str::FromStr;

/// A single parsed row and the source line it came from (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub values: Vec<i64>,
}

impl Row {
    pub fn new(line: usize, values: Vec<i64>) -> Self {
        Self { line, values }
    }
}

/// Rows of integers, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spreadsheet {
    rows: Vec<Row>,
}

impl Spreadsheet {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Compute the checksum of this sheet under `policy`
    pub fn checksum(&self, policy: ChecksumPolicy) -> Result<i64> {
        policy.apply(self)
    }
}

impl FromStr for Spreadsheet {
    type Err = SheetsumError;

    fn from_str(s: &str) -> Result<Self> {
        parse_spreadsheet(s)
    }
}

/// Parse spreadsheet text into rows of integers.
///
/// Rows are separated by line breaks and columns by any run of whitespace.
/// Blank lines carry no row but still count towards line numbers. The first
/// token that is not a base-10 integer aborts parsing.
pub fn parse_spreadsheet(content: &str) -> Result<Spreadsheet> {
    let mut rows = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .enumerate()
            .map(|(col_idx, token)| parse_token(token, line_idx + 1, col_idx + 1))
            .collect::<Result<Vec<_>>>()?;

        rows.push(Row::new(line_idx + 1, values));
    }

    Ok(Spreadsheet { rows })
}

fn parse_token(token: &str, line: usize, column: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| SheetsumError::MalformedToken {
            line,
            column,
            token: token.to_string(),
        })
}
