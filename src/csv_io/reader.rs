use csv::ReaderBuilder;
use std::path::Path;

use crate::error::MotionConverterError;

/// Reads a whole CSV file into a table of string cells.
///
/// The file is parsed as UTF-8 with quote-aware comma splitting. No row is
/// treated as a header and record lengths may vary, since camera exports
/// mix banner lines with wide data rows. A missing or unreadable path
/// propagates as an error; the caller decides how to report it.
pub fn read_table(path: &Path) -> Result<Vec<Vec<String>>, MotionConverterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
