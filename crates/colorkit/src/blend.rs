//! Layer blend modes, applied per channel on integer RGB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    Dodge,
    Burn,
}

impl BlendMode {
    pub const ALL: [BlendMode; 8] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::Dodge,
        BlendMode::Burn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::Dodge => "dodge",
            BlendMode::Burn => "burn",
        }
    }

    /// `a` is the top channel, `b` the bottom one, both `0..=255`.
    fn channel(self, a: f64, b: f64) -> f64 {
        match self {
            BlendMode::Normal => a,
            BlendMode::Multiply => a * b / 255.0,
            BlendMode::Screen => 255.0 * (1.0 - (1.0 - a / 255.0) * (1.0 - b / 255.0)),
            BlendMode::Overlay => {
                if b < 128.0 {
                    2.0 * a * b / 255.0
                } else {
                    255.0 * (1.0 - 2.0 * (1.0 - a / 255.0) * (1.0 - b / 255.0))
                }
            }
            BlendMode::Darken => a.min(b),
            BlendMode::Lighten => a.max(b),
            BlendMode::Dodge => {
                if a == 255.0 {
                    255.0
                } else {
                    (255.0 * (b / 255.0) / (1.0 - a / 255.0)).min(255.0)
                }
            }
            BlendMode::Burn => 255.0 * (1.0 - (1.0 - b / 255.0) / (a / 255.0)),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ColorError::UnknownBlendMode(s.to_string()))
    }
}

/// Blend `top` over `bottom`. The result is opaque.
pub fn blend(bottom: &Color, top: &Color, mode: BlendMode) -> Color {
    let a = top.rgb();
    let b = bottom.rgb();
    Color::from_rgb([0, 1, 2].map(|i| mode.channel(a[i], b[i])))
}
