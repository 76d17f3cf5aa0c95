//! Colour names for interface styles.
//!
//! Configuration refers to colours by name:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `"0"` through `"255"`
//! - `default`: leave the terminal's own colour in place

use runkit_dispatch::Color;

/// Parses a colour name. `Ok(None)` means "terminal default".
pub fn parse_color(name: &str) -> Result<Option<Color>, String> {
    let name = name.trim().to_lowercase();

    if name.is_empty() || name == "default" {
        return Ok(None);
    }

    if let Some(base) = name.strip_prefix("bright_") {
        return parse_bright_color(base).map(Some);
    }

    if name.bytes().all(|b| b.is_ascii_digit()) {
        return name
            .parse::<u8>()
            .map(|index| Some(Color::Color256(index)))
            .map_err(|_| format!("Color palette index {} out of range (0-255)", name));
    }

    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        // Also accept gray/grey as aliases
        "gray" | "grey" => Color::White,
        _ => return Err(format!("Unknown color name: {}", name)),
    };

    Ok(Some(color))
}

/// Parses a bright color variant.
fn parse_bright_color(base: &str) -> Result<Color, String> {
    // console renders bright colors through the 256-color palette (indices 8-15)
    let index = match base {
        "black" => 8,
        "red" => 9,
        "green" => 10,
        "yellow" => 11,
        "blue" => 12,
        "magenta" => 13,
        "cyan" => 14,
        "white" => 15,
        _ => return Err(format!("Unknown bright color: bright_{}", base)),
    };

    Ok(Color::Color256(index))
}
