//! Perceptual color metrics
//!
//! All selection thresholds are tuned against these exact formulas:
//! - WCAG 2.0 relative luminance and contrast ratio
//! - Redmean-weighted Euclidean RGB distance
//! - ITU-R BT.601 perceived brightness

use super::Color;

/// Linearize one sRGB channel (WCAG 2.0 transfer function)
fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.0 relative luminance in [0, 1]
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio in [1, 21]; symmetric in its arguments
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Redmean-weighted Euclidean distance
///
/// A cheap perceptual proxy that avoids a full Lab conversion.
pub fn color_distance(a: Color, b: Color) -> f64 {
    let rmean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    ((2.0 + rmean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - rmean) / 256.0) * db * db)
        .sqrt()
}

/// Perceived brightness (ITU-R BT.601) in [0, 255]
pub fn brightness(color: Color) -> f64 {
    0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64
}
