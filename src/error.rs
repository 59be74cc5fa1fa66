//! Error module
//!
//! Defines custom error types using `thiserror` for the motion converter.
//! This module provides a unified error type that wraps all possible error
//! sources and implements the `From` trait for automatic conversion from
//! underlying error types.

use thiserror::Error;

/// The main error type for the motion converter.
///
/// # Error Categories
///
/// - **Configuration errors**: required settings keys that are absent or
///   non-numeric when the transformer needs them
/// - **Input errors**: malformed data rows in the source CSV
/// - **File I/O errors**: CSV file reading/writing and general I/O failures
/// - **Encoding errors**: characters with no Shift_JIS representation
#[derive(Error, Debug)]
pub enum MotionConverterError {
    /// A required settings key is absent or holds a non-numeric value.
    ///
    /// The settings loader itself never fails, so a missing `settings.txt`
    /// only surfaces here, once the transformer looks a bone key up.
    #[error("missing or non-numeric setting: {0}")]
    MissingSetting(String),

    /// A data row in the input CSV could not be interpreted.
    ///
    /// Rows whose first cell is not all-digit are skipped silently; this
    /// error is for rows that pass that gate but have missing or
    /// unparseable rotation cells.
    #[error("invalid input row: {0}")]
    InvalidInput(String),

    /// CSV file handling error.
    ///
    /// This error occurs when reading from or writing to CSV files fails,
    /// including parsing errors in the input file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error.
    ///
    /// This error occurs for file system operations like opening, reading,
    /// or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output text could not be represented in the target encoding.
    ///
    /// The output file is written as Shift_JIS; any cell containing a
    /// character outside that repertoire aborts the write before any bytes
    /// reach disk.
    #[error("encoding error: {0}")]
    Encoding(String),
}
