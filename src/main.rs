mod error;
mod generate;
mod icon;
mod models;
mod utils;

use crate::error::IconError;
use crate::generate::generate_icons;
use crate::models::{GenerationMessage, ICON_SIZE, ITEM_ICONS, OUTPUT_DIR};
use crate::utils::ConsoleLogger;
use image::ImageFormat;
use log::{debug, error, warn};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

/// Generates the item table into `output_dir`, printing the per-file report
/// to `out`. Returns the process exit status.
fn run<W: Write>(output_dir: &Path, format: ImageFormat, out: &mut W) -> io::Result<u8> {
    let mut printed = Ok(());
    let result = generate_icons(&ITEM_ICONS, output_dir, ICON_SIZE, format, |message| {
        match message {
            GenerationMessage::Created { filename, path } => {
                debug!("Wrote {}", path.display());
                if printed.is_ok() {
                    printed = writeln!(out, "Created {}", filename);
                }
            }
            GenerationMessage::Failed { filename, error } => {
                warn!("Skipped {}: {}", filename, error);
            }
        }
    });
    printed?;

    match result {
        Ok(report) => {
            writeln!(out)?;
            writeln!(
                out,
                "Successfully generated {} placeholder item textures!",
                report.created()
            )?;
            if report.failed() > 0 {
                error!(
                    "{} of {} textures could not be written.",
                    report.failed(),
                    ITEM_ICONS.len()
                );
                return Ok(1);
            }
            Ok(0)
        }
        Err(IconError::MissingDependency { .. }) => {
            writeln!(
                out,
                "Error: PNG encoder not available. Rebuild with the \"png\" feature enabled."
            )?;
            writeln!(
                out,
                "Alternatively, create {0}x{0} PNG files manually in {1}/",
                ICON_SIZE, OUTPUT_DIR
            )?;
            Ok(0)
        }
        Err(e) => {
            error!("{}", e);
            Ok(1)
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = ConsoleLogger::init() {
        eprintln!("Logger unavailable: {}", e);
    }

    let stdout = io::stdout();
    match run(Path::new(OUTPUT_DIR), ImageFormat::Png, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Could not write to stdout: {}", e);
            ExitCode::FAILURE
        }
    }
}
