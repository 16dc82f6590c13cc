//! Color math, quantization and pair selection
//!
//! This module holds the pixel value type shared by every stage of the
//! pipeline, the WCAG/perceptual metrics, the histogram quantizer and the
//! tiered pair selector.

pub mod analysis;
pub mod conversion;
pub mod metrics;
pub mod quantize;

pub use analysis::{Analysis, ColorAnalyzer, ColorPair, SelectionTier};
pub use conversion::{parse_argb_hex, to_argb_hex};
pub use quantize::{quantize, Histogram};

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple, used both for sampled pixels and for bucket keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, truncating toward zero
    ///
    /// Results are clamped to [0, 255].
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::new(r, g, b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_truncates() {
        assert_eq!(Color::new(255, 0, 30).scaled(0.75), Color::new(191, 0, 22));
        assert_eq!(Color::new(12, 12, 12).scaled(0.75), Color::new(9, 9, 9));
    }

    #[test]
    fn test_scaled_clamps() {
        assert_eq!(Color::new(200, 10, 0).scaled(2.0), Color::new(255, 20, 0));
        assert_eq!(Color::new(200, 10, 0).scaled(-1.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_palette_roundtrip() {
        let color = Color::new(18, 52, 86);
        let srgb: Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (18, 52, 86));
        assert_eq!(Color::from(srgb), color);
    }

    #[test]
    fn test_image_pixel_conversion() {
        let pixel = image::Rgb([1u8, 2, 3]);
        assert_eq!(Color::from(pixel), Color::new(1, 2, 3));
        assert_eq!(image::Rgb::<u8>::from(Color::new(1, 2, 3)), pixel);
    }
}
