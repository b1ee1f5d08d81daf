//! Resize a single image file to exact pixel dimensions.
//!
//! The whole crate is [`resize_file`]: decode the input, resample it to the
//! requested `width x height` with a high-quality filter, and write it to
//! the output path with the format inferred from the extension. The image is
//! stretched to the exact target box; aspect ratio is deliberately not
//! preserved.
//!
//! ```no_run
//! use std::path::Path;
//!
//! exactsize::resize_file(Path::new("photo.jpeg"), Path::new("small.jpeg"), 480, 659)?;
//! # Ok::<(), exactsize::ResizeError>(())
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod decode;
mod encode;
pub mod error;
mod resize;

pub use error::{ResizeError, Result};

use std::path::Path;

/// Reads the image at `input`, resamples it to exactly `width x height`
/// pixels and writes it to `output`.
///
/// The input format is sniffed from the file contents; the output format is
/// chosen by the output path's extension. Dimensions are validated before
/// any file is touched, and the output file appears only after a fully
/// successful encode, so a failed call leaves the filesystem as it was.
/// An existing file at `output` is overwritten.
pub fn resize_file(input: &Path, output: &Path, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }
    let mut image = decode::decode(input)?;
    resize::resize_to_exact(&mut image, width, height);
    encode::encode(&image, output)
}
