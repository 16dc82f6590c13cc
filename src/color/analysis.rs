//! Foreground/background pair selection
//!
//! Picks the most frequent bucket as primary, then looks for a companion in
//! three tiers, each attempted only when the previous one came up empty:
//! - Strict: WCAG contrast and redmean distance both above the main thresholds
//! - Relaxed: lower contrast, half the distance
//! - Synthetic: a fixed near-black or near-white companion
//!
//! The lighter color of the pair becomes the foreground; the darker one becomes
//! the background and is darkened further.

use log::{debug, trace, warn};
use serde::Serialize;

use super::metrics::{brightness, color_distance, contrast_ratio};
use super::{to_argb_hex, Color, Histogram};
use crate::config::{ExtractionConfig, SelectionConfig};
use crate::constants::{fallback, quantization, roles, synthetic, text};
use crate::{Result, ThemeColors};

/// Which policy produced the secondary color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionTier {
    Strict,
    Relaxed,
    Synthetic,
}

/// Primary and secondary colors before role assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub primary: Color,
    pub secondary: Color,
    pub tier: SelectionTier,
}

/// Outcome of analyzing a pixel sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// No pixels were sampled; the fixed fallback colors apply
    NoData,
    /// A pair was selected and assigned roles
    Selected {
        pair: ColorPair,
        foreground: Color,
        /// Already darkened
        background: Color,
    },
}

impl Analysis {
    /// Final output strings
    pub fn theme(&self) -> ThemeColors {
        match self {
            Analysis::NoData => ThemeColors {
                dominant: fallback::FOREGROUND.to_string(),
                background: fallback::BACKGROUND.to_string(),
            },
            Analysis::Selected {
                foreground,
                background,
                ..
            } => ThemeColors {
                dominant: to_argb_hex(*foreground),
                background: to_argb_hex(*background),
            },
        }
    }

    pub fn tier(&self) -> Option<SelectionTier> {
        match self {
            Analysis::NoData => None,
            Analysis::Selected { pair, .. } => Some(pair.tier),
        }
    }
}

/// First candidate, in order, meeting both thresholds against `primary`
fn first_passing(
    primary: Color,
    candidates: &[(Color, usize)],
    min_contrast: f64,
    min_distance: f64,
) -> Option<Color> {
    candidates.iter().map(|&(color, _)| color).find(|&candidate| {
        let contrast = contrast_ratio(primary, candidate);
        let distance = color_distance(primary, candidate);
        let accepted = contrast >= min_contrast && distance >= min_distance;
        if !accepted {
            trace!(
                "rejected {:?}: contrast {:.3}, distance {:.1}",
                candidate,
                contrast,
                distance
            );
        }
        accepted
    })
}

/// Strict tier search over the non-primary buckets
pub fn strict_candidate(
    primary: Color,
    candidates: &[(Color, usize)],
    selection: &SelectionConfig,
) -> Option<Color> {
    first_passing(primary, candidates, selection.min_contrast, selection.min_distance)
}

/// Relaxed tier search over the non-primary buckets
pub fn relaxed_candidate(
    primary: Color,
    candidates: &[(Color, usize)],
    selection: &SelectionConfig,
) -> Option<Color> {
    first_passing(
        primary,
        candidates,
        selection.relaxed_contrast,
        selection.relaxed_distance(),
    )
}

/// Fixed high-contrast companion for `primary`
pub fn synthetic_companion(primary: Color) -> Color {
    if brightness(primary) > synthetic::BRIGHTNESS_MIDPOINT {
        synthetic::DARK_COMPANION
    } else {
        synthetic::LIGHT_COMPANION
    }
}

/// Fixed text color that stays legible on `background`
pub fn readable_text_color(background: Color) -> Color {
    if brightness(background) > text::BRIGHTNESS_THRESHOLD {
        text::DARK_TEXT
    } else {
        text::LIGHT_TEXT
    }
}

/// Run the tier chain over a frequency ranking
///
/// Returns `None` only for an empty ranking.
pub fn select_pair(ranked: &[(Color, usize)], selection: &SelectionConfig) -> Option<ColorPair> {
    let (&(primary, _), candidates) = ranked.split_first()?;

    let (secondary, tier) = strict_candidate(primary, candidates, selection)
        .map(|color| (color, SelectionTier::Strict))
        .or_else(|| {
            relaxed_candidate(primary, candidates, selection)
                .map(|color| (color, SelectionTier::Relaxed))
        })
        .unwrap_or_else(|| (synthetic_companion(primary), SelectionTier::Synthetic));

    Some(ColorPair {
        primary,
        secondary,
        tier,
    })
}

/// Split a pair into (foreground, darkened background)
///
/// Ties in brightness go to the primary as foreground.
pub fn assign_roles(pair: &ColorPair, background_darkening: f64) -> (Color, Color) {
    let (foreground, background) = if brightness(pair.primary) >= brightness(pair.secondary) {
        (pair.primary, pair.secondary)
    } else {
        (pair.secondary, pair.primary)
    };
    (foreground, background.scaled(background_darkening))
}

/// Color analyzer running quantization, ranking, selection and role assignment
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    step: u8,
    selection: SelectionConfig,
    background_darkening: f64,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAnalyzer {
    /// Create an analyzer with default parameters
    pub fn new() -> Self {
        Self {
            step: quantization::STEP,
            selection: SelectionConfig::default(),
            background_darkening: roles::BACKGROUND_DARKENING,
        }
    }

    /// Create an analyzer from a configuration
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidParameter` if the configuration does
    /// not pass [`ExtractionConfig::validate`].
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            step: config.quantization.step,
            selection: config.selection.clone(),
            background_darkening: config.roles.background_darkening,
        })
    }

    /// Analyze sampled pixels
    pub fn analyze(&self, pixels: &[Color]) -> Analysis {
        let histogram = Histogram::from_pixels(pixels, self.step);
        let ranked = histogram.ranked();
        debug!(
            "{} pixels in {} buckets (step {})",
            histogram.total(),
            ranked.len(),
            self.step
        );

        let Some(pair) = select_pair(&ranked, &self.selection) else {
            warn!("no pixels sampled, using fallback colors");
            return Analysis::NoData;
        };

        debug!(
            "primary {:?}, secondary {:?} via {:?} tier",
            pair.primary, pair.secondary, pair.tier
        );

        let (foreground, background) = assign_roles(&pair, self.background_darkening);
        Analysis::Selected {
            pair,
            foreground,
            background,
        }
    }
}
