//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros. The
//! converter takes a single positional input path and nothing else; the
//! per-bone configuration lives in `settings.txt` next to where the tool
//! is run.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the motion converter.
#[derive(Parser, Debug)]
#[command(name = "motion-converter")]
#[command(about = "Convert a camera motion CSV track into MMD bone keyframes")]
#[command(version)]
pub struct Args {
    /// Path to the camera motion CSV file
    pub input: PathBuf,
}

impl Args {
    /// Output path: `outputdata.csv` next to the input file.
    ///
    /// An input path with no directory component writes into the current
    /// directory.
    pub fn output_path(&self) -> PathBuf {
        match self.input.parent() {
            Some(dir) => dir.join("outputdata.csv"),
            None => PathBuf::from("outputdata.csv"),
        }
    }
}
