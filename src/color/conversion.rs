//! Hex color representation
//!
//! Output colors use the sketchybar `0xAARRGGBB` layout with lowercase digits
//! and a fixed `ff` alpha.

use super::Color;
use crate::{ExtractionError, Result};

/// Format a color as `0xffrrggbb`
pub fn to_argb_hex(color: Color) -> String {
    format!("0xff{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Parse a `0xAARRGGBB` string, ignoring the alpha byte
///
/// Accepts upper or lower case digits and either `0x` or `0X` as prefix.
pub fn parse_argb_hex(value: &str) -> Result<Color> {
    let invalid = || ExtractionError::InvalidColor {
        value: value.to_string(),
    };

    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(invalid)?;

    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let argb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let [_, r, g, b] = argb.to_be_bytes();
    Ok(Color::new(r, g, b))
}
