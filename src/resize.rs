use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

/// The one fixed resampling filter: a smooth, anti-aliasing convolution,
/// never nearest-neighbor.
const RESAMPLING: ResizeAlg = ResizeAlg::Convolution(FilterType::Lanczos3);

/// Resamples the image to exactly `width x height` pixels in place.
///
/// Each axis is stretched or shrunk independently; aspect ratio is
/// intentionally not preserved. Callers must have validated that both
/// dimensions are nonzero.
pub(crate) fn resize_to_exact(image: &mut DynamicImage, width: u32, height: u32) {
    if image.width() == width && image.height() == height {
        return;
    }
    let mut resizer = Resizer::new();
    let mut dst_image = DynamicImage::new(width, height, image.color());
    let options = ResizeOptions::default().resize_alg(RESAMPLING);
    resizer
        .resize(image, &mut dst_image, Some(&options))
        .unwrap();
    *image = dst_image;
}
