//! Integration tests for the complete extract_colors pipeline
//!
//! These tests write real PNG files and validate:
//! - Image loading and sampling
//! - Tier selection on solid, two-tone and low-contrast images
//! - Role assignment and background darkening
//! - Error handling for missing and corrupt files

use contrast_pair::{
    analyze_file, color::parse_argb_hex, color::metrics::brightness, extract_colors,
    extract_colors_with, Analysis, ExtractionConfig, ExtractionError, SelectionTier,
};
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_png(dir: &TempDir, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(rgb))
}

/// Top `split` rows in `top`, the rest in `bottom`
fn banded(width: u32, height: u32, split: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbImage {
    ImageBuffer::from_fn(width, height, |_, y| if y < split { Rgb(top) } else { Rgb(bottom) })
}

fn is_argb_hex(value: &str) -> bool {
    value.len() == 10
        && value.starts_with("0x")
        && value[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_extract_colors_file_not_found() {
    let result = extract_colors(Path::new("nonexistent_file.jpg"));

    match result {
        Err(ExtractionError::ImageLoadError { .. }) => {}
        other => panic!("Expected ImageLoadError, got: {:?}", other),
    }
}

#[test]
fn test_extract_colors_empty_path() {
    assert!(extract_colors(Path::new("")).is_err());
}

#[test]
fn test_extract_colors_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, [0xff, 0xd8, 0xff, 0x00, 0x01]).unwrap();

    assert!(matches!(
        extract_colors(&path),
        Err(ExtractionError::ImageLoadError { .. })
    ));
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_solid_black_uses_light_companion() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "black.png", &solid(64, 64, [0, 0, 0]));

    let analysis = analyze_file(&path, &ExtractionConfig::default()).unwrap();
    assert_eq!(analysis.tier(), Some(SelectionTier::Synthetic));

    let theme = analysis.theme();
    assert_eq!(theme.dominant, "0xffe6e6e6");
    assert_eq!(theme.background, "0xff090909");
}

#[test]
fn test_solid_white_uses_dark_companion() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "white.png", &solid(200, 100, [255, 255, 255]));

    let theme = extract_colors(&path).unwrap();
    assert_eq!(theme.dominant, "0xfffcfcfc");
    assert_eq!(theme.background, "0xff161616");
}

#[test]
fn test_two_tone_image_uses_strict_tier() {
    let dir = TempDir::new().unwrap();
    // 60% dark navy, 40% near-white
    let path = write_png(
        &dir,
        "two_tone.png",
        &banded(160, 160, 96, [10, 20, 60], [245, 245, 245]),
    );

    let analysis = analyze_file(&path, &ExtractionConfig::default()).unwrap();
    let Analysis::Selected { pair, foreground, background } = analysis else {
        panic!("expected a selected pair");
    };

    assert_eq!(pair.tier, SelectionTier::Strict);
    assert!(brightness(pair.primary) < brightness(pair.secondary));
    assert_eq!(foreground, pair.secondary);
    assert_eq!(background, pair.primary.scaled(0.75));
}

#[test]
fn test_low_contrast_image_uses_relaxed_tier() {
    let dir = TempDir::new().unwrap();
    let path = write_png(
        &dir,
        "low_contrast.png",
        &banded(80, 80, 56, [12, 12, 12], [84, 84, 84]),
    );

    let analysis = analyze_file(&path, &ExtractionConfig::default()).unwrap();
    assert_eq!(analysis.tier(), Some(SelectionTier::Relaxed));

    let theme = analysis.theme();
    assert_eq!(theme.dominant, "0xff545454");
    assert_eq!(theme.background, "0xff090909");
}

#[test]
fn test_stricter_config_falls_through_to_synthetic() {
    let dir = TempDir::new().unwrap();
    let path = write_png(
        &dir,
        "low_contrast.png",
        &banded(80, 80, 56, [12, 12, 12], [84, 84, 84]),
    );

    let mut config = ExtractionConfig::default();
    config.selection.relaxed_contrast = 3.0;

    let theme = extract_colors_with(&path, &config).unwrap();
    assert_eq!(theme.dominant, "0xffe6e6e6");
}

#[test]
fn test_output_format_and_ordering() {
    let dir = TempDir::new().unwrap();
    let images = [
        banded(120, 90, 30, [200, 40, 40], [20, 20, 90]),
        banded(90, 120, 70, [10, 200, 10], [250, 250, 250]),
        solid(33, 17, [128, 128, 128]),
        ImageBuffer::from_fn(100, 100, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 128])),
    ];

    for (i, image) in images.iter().enumerate() {
        let path = write_png(&dir, &format!("sample_{}.png", i), image);
        let theme = extract_colors(&path).unwrap();

        assert!(is_argb_hex(&theme.dominant), "bad dominant {}", theme.dominant);
        assert!(is_argb_hex(&theme.background), "bad background {}", theme.background);
        assert!(theme.dominant.starts_with("0xff"));

        let dominant = parse_argb_hex(&theme.dominant).unwrap();
        let background = parse_argb_hex(&theme.background).unwrap();
        assert!(brightness(dominant) >= brightness(background));
        assert_ne!(theme.dominant, theme.background);
    }
}
