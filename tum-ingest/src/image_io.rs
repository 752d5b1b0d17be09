//! Depth and color image decoding

use crate::error::ReaderError;
use crate::frame::{ColorImage, DepthImage};
use image::{DynamicImage, ImageBuffer};
use std::path::Path;

/// Load a single-channel depth raster and divide every pixel by `scaling`.
///
/// Pixel values are taken as stored (8- or 16-bit), not rescaled between bit
/// depths.
pub fn load_depth(path: &Path, scaling: f32) -> Result<DepthImage, ReaderError> {
    let img = image::open(path)?;
    depth_from_dynamic(&img, scaling)
}

pub(crate) fn depth_from_dynamic(img: &DynamicImage, scaling: f32) -> Result<DepthImage, ReaderError> {
    let (width, height) = (img.width(), img.height());
    let data: Vec<f32> = match img {
        DynamicImage::ImageLuma16(luma) => luma.as_raw().iter().map(|&v| v as f32 / scaling).collect(),
        DynamicImage::ImageLuma8(luma) => luma.as_raw().iter().map(|&v| v as f32 / scaling).collect(),
        other => {
            return Err(ReaderError::UnsupportedDepth(format!(
                "expected a single-channel image, got {:?}",
                other.color()
            )));
        }
    };

    ImageBuffer::from_raw(width, height, data).ok_or_else(|| {
        ReaderError::UnsupportedDepth(format!("buffer does not fit {}x{}", width, height))
    })
}

/// Load a color image as 3-channel RGB with the 0-255 range kept as `f32`.
pub fn load_color(path: &Path) -> Result<ColorImage, ReaderError> {
    let img = image::open(path)?;
    Ok(color_from_dynamic(&img))
}

pub(crate) fn color_from_dynamic(img: &DynamicImage) -> ColorImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        let p = rgb.get_pixel(x, y).0;
        image::Rgb([p[0] as f32, p[1] as f32, p[2] as f32])
    })
}
