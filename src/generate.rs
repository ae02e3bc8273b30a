use crate::error::{IconError, Result};
use crate::icon::render_item_icon;
use crate::models::{GenerationMessage, GenerationReport, IconSpec};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Checks that `format` can be encoded by this build. Runs before the
/// filesystem is touched so a missing encoder never leaves partial output.
pub fn acquire_encoder(format: ImageFormat) -> Result<ImageFormat> {
    if format.writing_enabled() {
        Ok(format)
    } else {
        Err(IconError::MissingDependency { format })
    }
}

/// Draws one icon and writes it to `<output_dir>/<filename>`.
fn write_icon(
    spec: &IconSpec,
    output_dir: &Path,
    size: u32,
    format: ImageFormat,
) -> Result<PathBuf> {
    let path = output_dir.join(spec.filename);
    let canvas = render_item_icon(spec.base_color, size);
    canvas
        .save_with_format(&path, format)
        .map_err(|source| IconError::WriteError {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Generates every icon in `specs` into `output_dir`, which must already exist.
///
/// A failed write is reported through `on_message` and the remaining icons are
/// still attempted. Only an unavailable encoder aborts the run, and it does so
/// before any file is written.
pub fn generate_icons<F>(
    specs: &[IconSpec],
    output_dir: &Path,
    size: u32,
    format: ImageFormat,
    mut on_message: F,
) -> Result<GenerationReport>
where
    F: FnMut(&GenerationMessage),
{
    let format = acquire_encoder(format)?;
    let mut report = GenerationReport::default();

    for spec in specs {
        let message = match write_icon(spec, output_dir, size, format) {
            Ok(path) => GenerationMessage::Created {
                filename: spec.filename,
                path,
            },
            Err(error) => GenerationMessage::Failed {
                filename: spec.filename,
                error,
            },
        };
        on_message(&message);
        report.messages.push(message);
    }

    Ok(report)
}
