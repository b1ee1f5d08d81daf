use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::error::{ResizeError, Result};

/// Reads and decodes the image at `path`.
///
/// The format is guessed from the file contents, not the extension, matching
/// the reader's convention.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    decode_inner(path).map_err(|source| ResizeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_inner(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.decode()
}
