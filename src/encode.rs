use std::{
    io::{BufWriter, Write},
    path::Path,
};

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError, ImageFormat};
use tempfile::NamedTempFile;

use crate::error::{ResizeError, Result};

/// Encodes the image to `path`, with the format chosen by the path's
/// extension. Color modes the format cannot carry are refused, never
/// silently converted.
///
/// The bytes go to a temporary file in the destination directory first and
/// are renamed over `path` only after a successful encode and flush, so a
/// failure never leaves a partial file at `path`. An existing file at `path`
/// is overwritten. The temporary file cleans itself up if the encode fails.
pub fn encode(image: &DynamicImage, path: &Path) -> Result<()> {
    encode_inner(image, path).map_err(|source| ResizeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

fn encode_inner(image: &DynamicImage, path: &Path) -> std::result::Result<(), ImageError> {
    // Resolve the format before touching the filesystem.
    let format = ImageFormat::from_path(path)?;

    // JPEG cannot store an alpha channel, and `write_to` flattens such
    // images silently rather than failing. Refuse the combination here.
    if format == ImageFormat::Jpeg && image.color().has_alpha() {
        return Err(ImageError::Unsupported(
            UnsupportedError::from_format_and_kind(
                ImageFormatHint::Exact(format),
                UnsupportedErrorKind::Color(image.color().into()),
            ),
        ));
    }

    // An empty parent means `path` is a bare file name in the current
    // directory.
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory)?;

    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file.as_file_mut());
    image.write_to(&mut writer, format)?;
    // The buffers would also be flushed when the writer goes out of scope,
    // but that would not report any errors. This handles errors.
    writer.flush()?;
    drop(writer);

    file.persist(path).map_err(|e| ImageError::from(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView};

    use super::*;

    fn solid_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200, 100, 50]),
        ))
    }

    #[test]
    fn writes_the_format_named_by_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        encode(&solid_image(9, 4), &path).unwrap();

        let reader = image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
        assert_eq!(reader.decode().unwrap().dimensions(), (9, 4));
    }

    #[test]
    fn unknown_extension_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknownext");
        let err = encode(&solid_image(4, 4), &path).unwrap_err();
        assert!(matches!(err, ResizeError::Encode { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn missing_directory_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let err = encode(&solid_image(4, 4), &path).unwrap_err();
        assert!(matches!(err, ResizeError::Encode { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale bytes that are not a png").unwrap();

        encode(&solid_image(6, 3), &path).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (6, 3));
    }

    #[test]
    fn alpha_into_jpeg_is_refused() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([1, 2, 3, 200]),
        ));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let err = encode(&rgba, &path).unwrap_err();
        assert!(matches!(err, ResizeError::Encode { .. }));
        assert!(err.to_string().contains("Rgba8"));
        assert!(!path.exists());
    }

    #[test]
    fn failure_after_encoding_leaves_no_temp_files_behind() {
        // A directory at the output path makes the final rename fail, after
        // the temporary file has been fully written.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::create_dir(&path).unwrap();

        let err = encode(&solid_image(4, 4), &path).unwrap_err();
        assert!(matches!(err, ResizeError::Encode { .. }));

        // Only the blocking directory may remain, no temporary files.
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("out.png")]);
        assert!(path.is_dir());
    }
}
