//! Loading spreadsheets from files and readers

use crate::error::Result;
use crate::spreadsheet::{Spreadsheet, parse_spreadsheet};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read and parse a spreadsheet file
pub fn load_spreadsheet(path: &Path) -> Result<Spreadsheet> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "loaded spreadsheet");
    parse_spreadsheet(&content)
}

/// Read a spreadsheet from any reader, e.g. stdin
pub fn read_spreadsheet<R: Read>(mut reader: R) -> Result<Spreadsheet> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    debug!(bytes = content.len(), "read spreadsheet");
    parse_spreadsheet(&content)
}
