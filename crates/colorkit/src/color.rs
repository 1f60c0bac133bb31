//! The [`Color`] value type.
//!
//! A color is always stored as sRGB with alpha: `r, g, b` in `[0, 255]`
//! (fractions allowed) and `a` in `[0, 1]`. Inputs outside that range are
//! clamped on construction; the original values stay available through
//! [`Color::unclipped`] and [`Color::clipped`] tells whether any RGB channel
//! had to be clamped.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};
use crate::input::{self, Format, Input};
use crate::interpolate::{self, Mode};
use crate::io::{css, hex, named, CssMode, HexMode};
use crate::space::{cmyk, hcg, hsi, hsl, hsv, lab, lch, oklab, temperature, Illuminant, Space};
use crate::util::{limit, round_half_up};

#[derive(Debug, Clone, Copy)]
pub struct Color {
    rgba: [f64; 4],
    unclipped: [f64; 4],
    clipped: bool,
}

/// Equality compares the stored (clamped) RGBA only.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba == other.rgba
    }
}

/// How [`Color::with_channel`] changes a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelEdit {
    Set(f64),
    /// Add a signed amount.
    Add(f64),
    Mul(f64),
    Div(f64),
}

impl ChannelEdit {
    fn apply(self, value: f64) -> f64 {
        match self {
            ChannelEdit::Set(v) => v,
            ChannelEdit::Add(v) => value + v,
            ChannelEdit::Mul(v) => value * v,
            ChannelEdit::Div(v) => value / v,
        }
    }
}

impl From<f64> for ChannelEdit {
    fn from(v: f64) -> Self {
        ChannelEdit::Set(v)
    }
}

/// `"0.5"` sets, `"+0.1"` and `"-0.1"` add, `"*2"` multiplies and `"/2"`
/// divides.
impl FromStr for ChannelEdit {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ColorError::InvalidChannelValue(s.to_string()))
        };
        match s.chars().next() {
            Some('+') | Some('-') => number(s).map(ChannelEdit::Add),
            Some('*') => number(&s[1..]).map(ChannelEdit::Mul),
            Some('/') => number(&s[1..]).map(ChannelEdit::Div),
            _ => number(s).map(ChannelEdit::Set),
        }
    }
}

fn split_path(path: &str) -> Result<(Space, &str)> {
    let (space, channel) = path.split_once('.').unwrap_or((path, ""));
    Ok((space.parse()?, channel))
}

impl Color {
    /// Build a color, autodetecting the input format.
    ///
    /// ```
    /// use colorkit::Color;
    ///
    /// let red = Color::new("#FF0000").unwrap();
    /// assert_eq!(red.rgba(), [255.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(Color::new([0.0, 128.0, 255.0, 0.5]).unwrap().alpha(), 0.5);
    /// ```
    pub fn new(input: impl Into<Input>) -> Result<Color> {
        let input = input.into();
        if let Input::Color(c) = input {
            return Ok(c);
        }
        let format = input::autodetect(&input)?;
        Self::decoded(format, &input)
    }

    /// Build a color from input in a known format.
    pub fn with_format(input: impl Into<Input>, format: Format) -> Result<Color> {
        let input = input.into();
        if let Input::Color(c) = input {
            return Ok(c);
        }
        Self::decoded(format, &input)
    }

    fn decoded(format: Format, input: &Input) -> Result<Color> {
        input::decode(format, input).map(Color::from_rgba)
    }

    /// Build from raw RGBA, clamping into range.
    pub fn from_rgba(rgba: [f64; 4]) -> Color {
        let [r, g, b, a] = rgba;
        let clipped = [r, g, b].iter().any(|c| *c < 0.0 || *c > 255.0);
        Color {
            rgba: [
                limit(r, 0.0, 255.0),
                limit(g, 0.0, 255.0),
                limit(b, 0.0, 255.0),
                limit(a, 0.0, 1.0),
            ],
            unclipped: rgba,
            clipped,
        }
    }

    pub fn from_rgb(rgb: [f64; 3]) -> Color {
        let [r, g, b] = rgb;
        Color::from_rgba([r, g, b, 1.0])
    }

    /// Build from a channel vector in `space`, with Lab-family channels
    /// relative to `white`.
    pub fn from_space(space: Space, channels: &[f64], white: Illuminant) -> Result<Color> {
        space.to_rgb(channels, white).map(Color::from_rgb)
    }

    pub fn from_lab_in(lab: [f64; 3], white: Illuminant) -> Color {
        Color::from_rgb(lab::to_rgb(lab, white))
    }

    pub fn from_lch_in(lch: [f64; 3], white: Illuminant) -> Color {
        Color::from_rgb(lch::to_rgb(lch, white))
    }

    /// A random opaque color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
        let n: u32 = rng.gen_range(0..=0xFF_FFFF);
        Color::from_rgb([
            f64::from(n >> 16),
            f64::from((n >> 8) & 0xFF),
            f64::from(n & 0xFF),
        ])
    }

    pub fn alpha(&self) -> f64 {
        self.rgba[3]
    }

    /// Copy with alpha replaced (clamped to `[0, 1]`).
    pub fn with_alpha(&self, alpha: f64) -> Color {
        let mut out = *self;
        out.set_alpha_in_place(alpha);
        out
    }

    pub fn set_alpha_in_place(&mut self, alpha: f64) {
        self.rgba[3] = limit(alpha, 0.0, 1.0);
        self.unclipped[3] = alpha;
    }

    /// Whether any RGB input channel was outside `[0, 255]`.
    pub fn clipped(&self) -> bool {
        self.clipped
    }

    /// RGBA as given, before clamping.
    pub fn unclipped(&self) -> [f64; 4] {
        self.unclipped
    }

    fn rgb_f(&self) -> [f64; 3] {
        [self.rgba[0], self.rgba[1], self.rgba[2]]
    }

    /// RGB channels rounded to integers.
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb_f().map(round_half_up)
    }

    /// Rounded RGB plus alpha.
    pub fn rgba(&self) -> [f64; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, self.rgba[3]]
    }

    /// Stored RGBA without rounding.
    pub fn rgb_raw(&self) -> [f64; 4] {
        self.rgba
    }

    pub fn hex(&self, mode: HexMode) -> String {
        hex::format(self.rgba, mode)
    }

    pub fn css(&self, mode: CssMode) -> String {
        css::format(self.rgba, mode)
    }

    /// W3C color name when one matches exactly, otherwise `#rrggbb`.
    pub fn name(&self) -> String {
        let hex = self.hex(HexMode::Rgb);
        named::name_for_hex(&hex).map_or(hex, str::to_string)
    }

    pub fn lab(&self) -> [f64; 3] {
        self.lab_in(Illuminant::D65)
    }

    pub fn lab_in(&self, white: Illuminant) -> [f64; 3] {
        lab::from_rgb(self.rgb_f(), white)
    }

    pub fn lch(&self) -> [f64; 3] {
        self.lch_in(Illuminant::D65)
    }

    pub fn lch_in(&self, white: Illuminant) -> [f64; 3] {
        lch::from_rgb(self.rgb_f(), white)
    }

    /// LCh reversed: `[h, c, l]`.
    pub fn hcl(&self) -> [f64; 3] {
        let [l, c, h] = self.lch();
        [h, c, l]
    }

    pub fn oklab(&self) -> [f64; 3] {
        oklab::from_rgb(self.rgb_f())
    }

    pub fn oklch(&self) -> [f64; 3] {
        lch::oklch_from_rgb(self.rgb_f())
    }

    pub fn hsl(&self) -> [f64; 3] {
        hsl::from_rgb(self.rgb_f())
    }

    pub fn hsv(&self) -> [f64; 3] {
        hsv::from_rgb(self.rgb_f())
    }

    pub fn hsi(&self) -> [f64; 3] {
        hsi::from_rgb(self.rgb_f())
    }

    pub fn hcg(&self) -> [f64; 3] {
        hcg::from_rgb(self.rgb_f())
    }

    pub fn cmyk(&self) -> [f64; 4] {
        cmyk::from_rgb(self.rgb_f())
    }

    /// RGBA with every channel in `[0, 1]`.
    pub fn gl(&self) -> [f64; 4] {
        let [r, g, b, a] = self.rgba;
        [r / 255.0, g / 255.0, b / 255.0, a]
    }

    /// Packed `0xRRGGBB`, channels truncated.
    pub fn num(&self) -> u32 {
        let [r, g, b] = self.rgb_f().map(|c| c as u32);
        (r << 16) + (g << 8) + b
    }

    /// Estimated correlated color temperature in Kelvin.
    pub fn temperature(&self) -> f64 {
        temperature::from_rgb(self.rgb_f())
    }

    /// Channel vector in `space`. RGB is rounded, Lab-family spaces use D65.
    pub fn channels(&self, space: Space) -> Vec<f64> {
        match space {
            Space::Rgb => self.rgb().to_vec(),
            other => other.from_rgb(self.rgb_f(), Illuminant::D65),
        }
    }

    /// Read one channel by `"space.channel"` path, e.g. `"lch.h"`.
    pub fn get(&self, path: &str) -> Result<f64> {
        let (space, channel) = split_path(path)?;
        let i = space.channel_index(channel)?;
        Ok(self.channels(space)[i])
    }

    /// Copy with one channel changed in the given space. Alpha is kept.
    ///
    /// ```
    /// use colorkit::{ChannelEdit, Color};
    ///
    /// let red = Color::new("red").unwrap();
    /// let darker = red.with_channel("lab.l", "*0.5".parse::<ChannelEdit>().unwrap()).unwrap();
    /// assert!(darker.lab()[0] < red.lab()[0]);
    /// ```
    pub fn with_channel(&self, path: &str, edit: impl Into<ChannelEdit>) -> Result<Color> {
        let (space, channel) = split_path(path)?;
        let i = space.channel_index(channel)?;
        let mut values = self.channels(space);
        values[i] = edit.into().apply(values[i]);
        let rgb = space.to_rgb(&values, Illuminant::D65)?;
        let [r, g, b] = rgb;
        Ok(Color::from_rgba([r, g, b, self.alpha()]))
    }

    /// In-place variant of [`with_channel`](Self::with_channel). On error the
    /// color is left untouched.
    pub fn set_channel_in_place(&mut self, path: &str, edit: impl Into<ChannelEdit>) -> Result<()> {
        *self = self.with_channel(path, edit)?;
        Ok(())
    }

    /// RGB multiplied by alpha.
    pub fn premultiplied(&self) -> Color {
        let mut out = *self;
        out.premultiply_in_place();
        out
    }

    pub fn premultiply_in_place(&mut self) {
        let [r, g, b, a] = self.rgba;
        *self = Color::from_rgba([r * a, g * a, b * a, a]);
    }

    /// Lower Lab lightness by `18 * amount`.
    pub fn darken(&self, amount: f64) -> Color {
        let mut lab = self.lab();
        lab[0] -= lab::KN * amount;
        Color::from_lab_in(lab, Illuminant::D65).with_alpha(self.alpha())
    }

    pub fn brighten(&self, amount: f64) -> Color {
        self.darken(-amount)
    }

    /// Raise LCh chroma by `18 * amount`, never below zero.
    pub fn saturate(&self, amount: f64) -> Color {
        let mut lch = self.lch();
        lch[1] = (lch[1] + lab::KN * amount).max(0.0);
        Color::from_lch_in(lch, Illuminant::D65).with_alpha(self.alpha())
    }

    pub fn desaturate(&self, amount: f64) -> Color {
        self.saturate(-amount)
    }

    /// Mix with `other`; see [`interpolate::mix`].
    pub fn mix(&self, other: &Color, f: f64, mode: Mode) -> Color {
        interpolate::mix(self, other, f, mode)
    }

    /// Mix towards black.
    pub fn shade(&self, ratio: f64, mode: Mode) -> Color {
        interpolate::mix(self, &Color::from_rgb([0.0, 0.0, 0.0]), ratio, mode)
    }

    /// Mix towards white.
    pub fn tint(&self, ratio: f64, mode: Mode) -> Color {
        interpolate::mix(self, &Color::from_rgb([255.0, 255.0, 255.0]), ratio, mode)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex(HexMode::Auto))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Color::new(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex(HexMode::Auto))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether `input` can be read as a color.
pub fn valid(input: impl Into<Input>) -> bool {
    Color::new(input).is_ok()
}

pub fn valid_with_format(input: impl Into<Input>, format: Format) -> bool {
    Color::with_format(input, format).is_ok()
}
