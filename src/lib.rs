//! # Contrast Pair
//!
//! Extracts two mutually readable colors from an image, for use as status
//! bar theme colors.
//!
//! The pipeline:
//! - Samples the image on a fixed 80x80 grid
//! - Quantizes pixels into coarse color-cube buckets and ranks them by frequency
//! - Pairs the most frequent bucket with the first one passing WCAG contrast
//!   and redmean distance thresholds, relaxing them or synthesizing a
//!   companion when nothing qualifies
//! - Uses the lighter color as foreground and a darkened darker color as background
//!
//! ## Example
//!
//! ```rust,no_run
//! use contrast_pair::extract_colors;
//! use std::path::Path;
//!
//! let theme = extract_colors(Path::new("cover.jpg"))?;
//! println!("DOMINANT={}", theme.dominant);
//! println!("BACKGROUND={}", theme.background);
//! # Ok::<(), contrast_pair::ExtractionError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;

pub use color::{Analysis, Color, ColorAnalyzer, ColorPair, SelectionTier};
pub use config::ExtractionConfig;
pub use error::{ExtractionError, Result};

/// Final theme colors as `0xffrrggbb` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Lighter color, for text and icons
    pub dominant: String,
    /// Darker color, for item backgrounds
    pub background: String,
}

impl ThemeColors {
    /// Text color for labels and icons drawn on `background`
    ///
    /// Dark text on bright backgrounds, light text otherwise.
    pub fn label(&self) -> Result<String> {
        let background = color::parse_argb_hex(&self.background)?;
        Ok(color::to_argb_hex(color::analysis::readable_text_color(background)))
    }
}

/// Extract theme colors from an image file with the default configuration
///
/// # Errors
///
/// Returns `ExtractionError::ImageLoadError` if the file cannot be opened or decoded.
pub fn extract_colors(image_path: &Path) -> Result<ThemeColors> {
    extract_colors_with(image_path, &ExtractionConfig::default())
}

/// Extract theme colors from an image file
///
/// # Errors
///
/// Returns `ExtractionError` if the configuration is invalid or the image
/// cannot be loaded.
pub fn extract_colors_with(image_path: &Path, config: &ExtractionConfig) -> Result<ThemeColors> {
    Ok(analyze_file(image_path, config)?.theme())
}

/// Run the full pipeline and keep the intermediate selection
pub fn analyze_file(image_path: &Path, config: &ExtractionConfig) -> Result<Analysis> {
    let analyzer = ColorAnalyzer::from_config(config)?;
    let pixels = image_loader::sample_pixels(image_path, &config.sampling)?;
    Ok(analyzer.analyze(&pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors_serialization() {
        let theme = ThemeColors {
            dominant: "0xffe6e6e6".to_string(),
            background: "0xff090909".to_string(),
        };

        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, r#"{"dominant":"0xffe6e6e6","background":"0xff090909"}"#);

        let deserialized: ThemeColors = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, deserialized);
    }

    #[test]
    fn test_label_follows_background_brightness() {
        let dark = ThemeColors {
            dominant: "0xffe6e6e6".to_string(),
            background: "0xff090909".to_string(),
        };
        assert_eq!(dark.label().unwrap(), "0xfff0f0f0");

        let bright = ThemeColors {
            dominant: "0xfffcfcfc".to_string(),
            background: "0xffbdbdbd".to_string(),
        };
        assert_eq!(bright.label().unwrap(), "0xff141414");
    }

    #[test]
    fn test_label_rejects_malformed_background() {
        let theme = ThemeColors {
            dominant: "0xffe6e6e6".to_string(),
            background: "#090909".to_string(),
        };
        assert!(matches!(theme.label(), Err(ExtractionError::InvalidColor { .. })));
    }

    #[test]
    fn test_invalid_config_rejected_before_loading() {
        let mut config = ExtractionConfig::default();
        config.quantization.step = 0;

        // the path does not exist; validation must fail first
        let err = extract_colors_with(Path::new("missing.png"), &config).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidParameter { .. }));
    }
}
