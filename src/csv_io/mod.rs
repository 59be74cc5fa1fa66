//! CSV I/O module
//!
//! Handles reading the UTF-8 input table and writing the Shift_JIS output
//! table.

pub mod encoding;
pub mod reader;
pub mod writer;

pub use encoding::encode_shift_jis;
pub use reader::read_table;
pub use writer::write_table;
