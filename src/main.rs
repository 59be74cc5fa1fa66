//! Motion Converter - turn a camera motion CSV track into MMD bone keyframes
//!
//! One-shot batch tool: it loads per-bone scale factors from `settings.txt`
//! in the working directory, reads the camera CSV given on the command
//! line, fans every rotation sample out onto the body bones, and writes
//! `outputdata.csv` next to the input file in the Shift_JIS VMD text
//! layout.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration or input-data error |
//! | 3 | File I/O, CSV, or encoding error |

mod cli;
mod csv_io;
mod error;
mod settings;
mod transform;
mod vmd;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use cli::Args;
use csv_io::{read_table, write_table};
use error::MotionConverterError;
use settings::{Settings, SETTINGS_FILE};
use transform::{apply_trimming, transform_table};
use vmd::{header_rows, trailer_rows, BoneKeyframe};

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration or input-data errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O, CSV, and encoding errors
const EXIT_IO_ERROR: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => ExitCode::from(error_to_exit_code(&e)),
    }
}

/// Main conversion pipeline.
///
/// Settings load cannot fail (a missing file yields an empty map and is
/// reported inside the loader); everything after that propagates errors,
/// with a message printed here before they bubble up to the exit code.
fn run(args: &Args) -> Result<(), MotionConverterError> {
    let settings = Settings::load(Path::new(SETTINGS_FILE));

    let rows = read_table(&args.input).map_err(|e| {
        eprintln!("Error: failed to read input file {:?}: {}", args.input, e);
        e
    })?;

    let body = transform_table(&rows, &settings).map_err(|e| {
        eprintln!("Error: conversion failed: {}", e);
        e
    })?;
    let body = apply_trimming(body, &settings);

    let mut table = header_rows();
    table.extend(body.into_iter().map(BoneKeyframe::into_row));
    table.extend(trailer_rows());

    let output = args.output_path();
    write_table(&output, &table).map_err(|e| {
        eprintln!("Error: failed to write output file {:?}: {}", output, e);
        e
    })?;

    eprintln!("Wrote motion data to {:?}", output);
    Ok(())
}

/// Convert an error to the appropriate exit code.
fn error_to_exit_code(error: &MotionConverterError) -> u8 {
    match error {
        MotionConverterError::MissingSetting(_) => EXIT_CONFIG_ERROR,
        MotionConverterError::InvalidInput(_) => EXIT_CONFIG_ERROR,
        MotionConverterError::Csv(_) => EXIT_IO_ERROR,
        MotionConverterError::Io(_) => EXIT_IO_ERROR,
        MotionConverterError::Encoding(_) => EXIT_IO_ERROR,
    }
}
