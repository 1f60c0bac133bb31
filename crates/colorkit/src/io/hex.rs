//! Hexadecimal color notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::util::round_half_up;

/// Which channels [`format`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexMode {
    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    #[default]
    Auto,
    Rgb,
    Rgba,
    Argb,
}

impl FromStr for HexMode {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(HexMode::Auto),
            "rgb" => Ok(HexMode::Rgb),
            "rgba" => Ok(HexMode::Rgba),
            "argb" => Ok(HexMode::Argb),
            _ => Err(ColorError::UnknownFormatName(s.to_string())),
        }
    }
}

impl fmt::Display for HexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HexMode::Auto => "auto",
            HexMode::Rgb => "rgb",
            HexMode::Rgba => "rgba",
            HexMode::Argb => "argb",
        })
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// Shorthand digits are doubled. The alpha byte maps to `byte / 255`, so
/// parsing and [`format`] agree on every alpha byte.
///
/// # Example
///
/// ```
/// use colorkit::io::hex;
///
/// assert_eq!(hex::parse("#f00").unwrap(), [255.0, 0.0, 0.0, 1.0]);
/// assert_eq!(hex::parse("00ff0033").unwrap(), [0.0, 255.0, 0.0, 0.2]);
/// ```
pub fn parse(input: &str) -> Result<[f64; 4]> {
    let s = input.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::decode("hex", input, "invalid hex digit"));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => {
            return Err(ColorError::decode(
                "hex",
                input,
                "expected 3, 4, 6 or 8 hex digits",
            ))
        }
    };

    let byte = |i: usize| -> Result<f64> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(f64::from)
            .map_err(|e| ColorError::decode("hex", input, e))
    };

    let alpha = if expanded.len() == 8 {
        byte(6)? / 255.0
    } else {
        1.0
    };
    Ok([byte(0)?, byte(2)?, byte(4)?, alpha])
}

/// Format RGBA as lowercase hex. Channels are rounded.
pub fn format(rgba: [f64; 4], mode: HexMode) -> String {
    let [r, g, b, a] = rgba;
    let channel = |v: f64| round_half_up(v).clamp(0.0, 255.0) as u8;
    let rgb = format!("{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b));
    let alpha = format!("{:02x}", channel(a * 255.0));

    let mode = match mode {
        HexMode::Auto if a < 1.0 => HexMode::Rgba,
        HexMode::Auto => HexMode::Rgb,
        m => m,
    };
    match mode {
        HexMode::Rgba => format!("#{rgb}{alpha}"),
        HexMode::Argb => format!("#{alpha}{rgb}"),
        _ => format!("#{rgb}"),
    }
}
