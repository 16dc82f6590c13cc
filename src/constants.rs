//! Tuning constants for color pair extraction
//!
//! These are the defaults behind [`crate::ExtractionConfig`]. The selection
//! thresholds are tuned against the exact formulas in [`crate::color::metrics`].

/// Image sampling parameters
pub mod sampling {
    /// Width of the grid every image is resized to
    pub const SAMPLE_WIDTH: u32 = 80;

    /// Height of the grid every image is resized to
    pub const SAMPLE_HEIGHT: u32 = 80;

    /// Largest configurable grid side
    pub const MAX_SAMPLE_DIMENSION: u32 = 1024;
}

/// Histogram quantization parameters
pub mod quantization {
    /// Width of each channel bucket
    pub const STEP: u8 = 24;
}

/// Pair acceptance thresholds
pub mod thresholds {
    /// Strict tier: minimum WCAG contrast ratio
    pub const MIN_CONTRAST: f64 = 3.0;

    /// Strict tier: minimum redmean distance
    pub const MIN_DISTANCE: f64 = 80.0;

    /// Relaxed tier: minimum WCAG contrast ratio
    pub const RELAXED_CONTRAST: f64 = 2.0;

    /// Relaxed tier distance is `MIN_DISTANCE * RELAXED_DISTANCE_FACTOR`
    pub const RELAXED_DISTANCE_FACTOR: f64 = 0.5;
}

/// Synthetic companion colors used when no histogram bucket qualifies
pub mod synthetic {
    use crate::color::Color;

    /// Companion for a bright primary
    pub const DARK_COMPANION: Color = Color::new(30, 30, 30);

    /// Companion for a dark primary
    pub const LIGHT_COMPANION: Color = Color::new(230, 230, 230);

    /// Primaries brighter than this get the dark companion
    pub const BRIGHTNESS_MIDPOINT: f64 = 127.0;
}

/// Label/icon text colors drawn on top of the background
pub mod text {
    use crate::color::Color;

    /// Text for a bright background
    pub const DARK_TEXT: Color = Color::new(20, 20, 20);

    /// Text for a dark background
    pub const LIGHT_TEXT: Color = Color::new(240, 240, 240);

    /// Backgrounds brighter than this get dark text
    pub const BRIGHTNESS_THRESHOLD: f64 = 140.0;
}

/// Role assignment parameters
pub mod roles {
    /// Multiplier applied to each background channel
    pub const BACKGROUND_DARKENING: f64 = 0.75;
}

/// Output returned when the image holds no pixels at all
pub mod fallback {
    pub const FOREGROUND: &str = "0xff888888";
    pub const BACKGROUND: &str = "0xff222222";
}
