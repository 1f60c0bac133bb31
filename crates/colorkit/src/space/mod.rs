//! Color-space codecs.
//!
//! Each submodule is a pair of pure functions, `from_rgb` and `to_rgb`,
//! between sRGB (channels in `0..=255`, unclamped) and one space. Alpha is
//! never part of a codec; [`Color`](crate::Color) carries it separately.
//!
//! [`Space`] names the spaces that have a channel vector, so code that works
//! on "any space" (channel access, distance, averaging) can dispatch on it.

pub mod cmyk;
pub mod hcg;
pub mod hsi;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod lch;
pub mod oklab;
pub mod temperature;
pub mod whitepoint;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use whitepoint::Illuminant;

use crate::error::{ColorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Rgb,
    #[default]
    Lab,
    Lch,
    /// LCh with the channels reversed: `[h, c, l]`.
    Hcl,
    Hsl,
    Hsv,
    Hsi,
    Hcg,
    Cmyk,
    Oklab,
    Oklch,
}

impl Space {
    pub const ALL: [Space; 11] = [
        Space::Rgb,
        Space::Lab,
        Space::Lch,
        Space::Hcl,
        Space::Hsl,
        Space::Hsv,
        Space::Hsi,
        Space::Hcg,
        Space::Cmyk,
        Space::Oklab,
        Space::Oklch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Hcl => "hcl",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Hsi => "hsi",
            Space::Hcg => "hcg",
            Space::Cmyk => "cmyk",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
        }
    }

    /// Channel letters in vector order. The OK spaces reuse the Lab/LCh
    /// letters, so `oklch.h` is the third channel.
    pub fn letters(self) -> &'static str {
        match self {
            Space::Oklab => "lab",
            Space::Oklch => "lch",
            other => other.name(),
        }
    }

    /// Index of `channel` (a single letter) within this space's vector.
    pub fn channel_index(self, channel: &str) -> Result<usize> {
        let unknown = || ColorError::UnknownChannel {
            channel: channel.to_string(),
            space: self.name().to_string(),
        };
        let mut chars = channel.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.letters().find(c).ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }

    /// Position of the hue channel, if the space has one.
    pub fn hue_index(self) -> Option<usize> {
        match self {
            Space::Hsl | Space::Hsv | Space::Hsi | Space::Hcg | Space::Hcl => Some(0),
            Space::Lch | Space::Oklch => Some(2),
            _ => None,
        }
    }

    pub fn channel_count(self) -> usize {
        self.letters().len()
    }

    /// Encode sRGB into this space. `white` only affects the CIE Lab family.
    pub fn from_rgb(self, rgb: [f64; 3], white: Illuminant) -> Vec<f64> {
        match self {
            Space::Rgb => rgb.to_vec(),
            Space::Lab => lab::from_rgb(rgb, white).to_vec(),
            Space::Lch => lch::from_rgb(rgb, white).to_vec(),
            Space::Hcl => {
                let [l, c, h] = lch::from_rgb(rgb, white);
                vec![h, c, l]
            }
            Space::Hsl => hsl::from_rgb(rgb).to_vec(),
            Space::Hsv => hsv::from_rgb(rgb).to_vec(),
            Space::Hsi => hsi::from_rgb(rgb).to_vec(),
            Space::Hcg => hcg::from_rgb(rgb).to_vec(),
            Space::Cmyk => cmyk::from_rgb(rgb).to_vec(),
            Space::Oklab => oklab::from_rgb(rgb).to_vec(),
            Space::Oklch => lch::oklch_from_rgb(rgb).to_vec(),
        }
    }

    /// Decode a channel vector of exactly [`channel_count`](Self::channel_count)
    /// values back to sRGB.
    pub fn to_rgb(self, channels: &[f64], white: Illuminant) -> Result<[f64; 3]> {
        if channels.len() != self.channel_count() {
            return Err(ColorError::decode(
                self.name(),
                format!("{channels:?}"),
                format!("expected {} channels", self.channel_count()),
            ));
        }
        let v3 = [channels[0], channels[1], channels[2]];
        Ok(match self {
            Space::Rgb => v3,
            Space::Lab => lab::to_rgb(v3, white),
            Space::Lch => lch::to_rgb(v3, white),
            Space::Hcl => lch::to_rgb([v3[2], v3[1], v3[0]], white),
            Space::Hsl => hsl::to_rgb(v3),
            Space::Hsv => hsv::to_rgb(v3),
            Space::Hsi => hsi::to_rgb(v3),
            Space::Hcg => hcg::to_rgb(v3),
            Space::Cmyk => cmyk::to_rgb([channels[0], channels[1], channels[2], channels[3]]),
            Space::Oklab => oklab::to_rgb(v3),
            Space::Oklch => lch::oklch_to_rgb(v3),
        })
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Space::ALL
            .into_iter()
            .find(|space| space.name() == lower)
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}
