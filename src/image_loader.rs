//! Image loading and sampling
//!
//! Every input is decoded with the `image` crate, converted to RGB8 and
//! resized to a small fixed grid, so downstream cost does not depend on the
//! source resolution. The format is sniffed from the file content first and
//! from the extension second, which covers everything the `image` crate's
//! default features decode (PNG, JPEG, GIF, WebP, TIFF, BMP, ICO, TGA, ...).

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use log::debug;

use crate::color::Color;
use crate::config::SamplingConfig;
use crate::{ExtractionError, Result};

/// Load and decode an image from disk
///
/// # Errors
///
/// Returns `ExtractionError::ImageLoadError` if:
/// - File cannot be opened
/// - Format cannot be determined
/// - Decoding fails
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        ExtractionError::image_load(
            format!("Failed to open image file: {} ({})", path.display(), e),
            e,
        )
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        ExtractionError::image_load(
            format!("Failed to read image file: {} ({})", path.display(), e),
            e,
        )
    })?;

    reader.decode().map_err(|e| {
        ExtractionError::image_load(
            format!("Failed to decode image: {} ({})", path.display(), e),
            e,
        )
    })
}

/// Resize to the sampling grid and flatten into row-major pixels
///
/// An image with no pixels yields an empty sequence.
pub fn sample_image(image: &DynamicImage, sampling: &SamplingConfig) -> Vec<Color> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let rgb: RgbImage = image.to_rgb8();
    let resized = image::imageops::resize(
        &rgb,
        sampling.width,
        sampling.height,
        FilterType::CatmullRom,
    );
    debug!(
        "sampled {}x{} image down to {}x{}",
        image.width(),
        image.height(),
        resized.width(),
        resized.height()
    );

    resized.pixels().map(|&pixel| Color::from(pixel)).collect()
}

/// Load an image and return its sampled pixels
pub fn sample_pixels(path: &Path, sampling: &SamplingConfig) -> Result<Vec<Color>> {
    let image = load_image(path)?;
    Ok(sample_image(&image, sampling))
}
