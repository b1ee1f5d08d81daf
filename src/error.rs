//! Typed failures for the resize pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResizeError>;

/// Everything that can make a single resize run fail.
///
/// Each variant names the stage that failed and carries the offending path
/// or value, so printing the error yields one self-contained line.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// The input file is missing, unreadable, or not a decodable image.
    #[error("unable to decode image `{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output location cannot be written, or its extension does not
    /// name a supported format.
    #[error("unable to encode image `{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Target dimensions with a zero side. Rejected before any file is
    /// touched.
    #[error("invalid dimensions {width}x{height}: width and height must be nonzero")]
    InvalidDimensions { width: u32, height: u32 },
}
