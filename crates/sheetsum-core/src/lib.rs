//! sheetsum-core - spreadsheet checksums and spiral addressing.

pub mod checksum;
pub mod error;
pub mod io;
pub mod spiral;
pub mod spreadsheet;

pub use checksum::{ChecksumPolicy, checksum, checksum1, checksum2, row_quotients, row_range};
pub use error::{Result, SheetsumError};
pub use io::{load_spreadsheet, read_spreadsheet};
pub use spiral::{spiral_index, step_count};
pub use spreadsheet::{Row, Spreadsheet, parse_spreadsheet};
