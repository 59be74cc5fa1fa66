use csv::{Terminator, WriterBuilder};
use std::fs;
use std::io;
use std::path::Path;

use super::encoding::encode_shift_jis;
use crate::error::MotionConverterError;

/// Writes a table of rows to a Shift_JIS CSV file.
///
/// Rows are serialized in order with minimal quoting and CRLF line
/// endings, matching what MMD's CSV tooling expects. The whole table is
/// rendered to an in-memory buffer and encoded before anything touches
/// disk, so an encoding failure leaves no partial output file behind.
pub fn write_table(path: &Path, rows: &[Vec<String>]) -> Result<(), MotionConverterError> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let text = String::from_utf8(buffer)
        .map_err(|e| MotionConverterError::Encoding(e.to_string()))?;

    let bytes = encode_shift_jis(&text)?;
    fs::write(path, bytes)?;
    Ok(())
}
