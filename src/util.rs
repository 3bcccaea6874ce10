//! Color name lookup and parsing helpers.
//!
//! Colors reach the overlay as picker hex values (`#ff0000`), config names
//! (`"red"`), or RGB arrays; these helpers normalize the textual forms.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses either a palette name or a hex value (`#rrggbb` / `#rgb`).
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        Color::from_hex(value)
    } else {
        name_to_color(value).or_else(|| Color::from_hex(value))
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance) and falls back to the hex form
/// for colors outside the palette. Used in log and summary output.
pub fn color_to_name(color: &Color) -> String {
    let name = if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "white"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "black"
    } else {
        return color.to_hex();
    };
    name.to_string()
}
