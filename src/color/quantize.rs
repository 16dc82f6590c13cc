//! Color-cube quantization and frequency ranking
//!
//! Near-duplicate shades collapse into one bucket so the histogram reflects
//! the image's actual color regions instead of sensor noise.

use std::collections::HashMap;

use super::Color;

/// Map one channel to the center of its `step`-wide bucket, clamped to 255
fn quantize_channel(channel: u8, step: u8) -> u8 {
    let step = step as u16;
    let center = (channel as u16 / step) * step + step / 2;
    center.min(255) as u8
}

/// Map a color to the center of its quantization bucket
///
/// # Panics
///
/// Panics if `step` is zero. [`crate::ExtractionConfig::validate`] rejects a
/// zero step, and [`crate::ColorAnalyzer::from_config`] runs that check.
pub fn quantize(color: Color, step: u8) -> Color {
    Color::new(
        quantize_channel(color.r, step),
        quantize_channel(color.g, step),
        quantize_channel(color.b, step),
    )
}

/// Occurrence counts per bucket, rankable by frequency
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    /// bucket -> (count, index of first occurrence)
    buckets: HashMap<Color, (usize, usize)>,
    total: usize,
}

impl Histogram {
    /// Quantize and count every pixel
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero, see [`quantize`].
    pub fn from_pixels(pixels: &[Color], step: u8) -> Self {
        let mut histogram = Self::default();
        for &pixel in pixels {
            histogram.insert(quantize(pixel, step));
        }
        histogram
    }

    /// Count one already-quantized bucket key
    pub fn insert(&mut self, bucket: Color) {
        let first_seen = self.total;
        self.buckets.entry(bucket).or_insert((0, first_seen)).0 += 1;
        self.total += 1;
    }

    /// Number of distinct buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of counted pixels
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, bucket: Color) -> usize {
        self.buckets.get(&bucket).map_or(0, |&(count, _)| count)
    }

    /// Buckets ordered by count descending
    ///
    /// Equal counts keep first-occurrence order. An empty histogram yields an
    /// empty ranking.
    pub fn ranked(&self) -> Vec<(Color, usize)> {
        let mut entries: Vec<(Color, usize, usize)> = self
            .buckets
            .iter()
            .map(|(&bucket, &(count, first_seen))| (bucket, count, first_seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries
            .into_iter()
            .map(|(bucket, count, _)| (bucket, count))
            .collect()
    }
}
