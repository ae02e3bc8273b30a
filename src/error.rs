//! Error types for icon generation

use image::ImageFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum IconError {
    /// The encoder for the requested image format was not compiled in
    #[error("{format:?} encoder not available")]
    MissingDependency { format: ImageFormat },

    /// Encoding or writing a single icon failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
