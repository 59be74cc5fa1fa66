//! Motion Converter Library
//!
//! Core functionality for the motion converter CLI tool: parsing the
//! per-bone settings file, reading a camera motion CSV, fanning each
//! rotation sample out onto the body bones, and writing the resulting
//! keyframe table as Shift_JIS CSV in the VMD text layout.

pub mod cli;
pub mod csv_io;
pub mod error;
pub mod settings;
pub mod transform;
pub mod vmd;
