//! Format registry and input autodetection.
//!
//! Every color notation the crate can read is a [`Format`]. Each format has a
//! decoder in a fixed table built on first use, and most have an
//! autodetection rule. Rules carry a priority and are tried highest first;
//! ties keep their registration order.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::io::{css, hex, named};
use crate::space::{temperature, Illuminant, Space};

/// Raw material a [`Color`] can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Number(f64),
    Channels(Vec<f64>),
    Color(Color),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => f.write_str(s),
            Input::Number(n) => write!(f, "{n}"),
            Input::Channels(v) => write!(f, "{v:?}"),
            Input::Color(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Text(s.clone())
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        Input::Number(n)
    }
}

impl From<u32> for Input {
    fn from(n: u32) -> Self {
        Input::Number(f64::from(n))
    }
}

impl From<i32> for Input {
    fn from(n: i32) -> Self {
        Input::Number(f64::from(n))
    }
}

impl From<Vec<f64>> for Input {
    fn from(v: Vec<f64>) -> Self {
        Input::Channels(v)
    }
}

impl From<&[f64]> for Input {
    fn from(v: &[f64]) -> Self {
        Input::Channels(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Input {
    fn from(v: [f64; N]) -> Self {
        Input::Channels(v.to_vec())
    }
}

impl From<Color> for Input {
    fn from(c: Color) -> Self {
        Input::Color(c)
    }
}

impl From<&Color> for Input {
    fn from(c: &Color) -> Self {
        Input::Color(*c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Named,
    Hex,
    Css,
    Num,
    Rgb,
    /// RGB(A) with every channel in `[0, 1]`.
    Gl,
    Lab,
    Lch,
    Hcl,
    Hsl,
    Hsv,
    Hsi,
    Hcg,
    Cmyk,
    Oklab,
    Oklch,
    /// Correlated color temperature in Kelvin.
    Temperature,
}

impl Format {
    pub const ALL: [Format; 17] = [
        Format::Named,
        Format::Hex,
        Format::Css,
        Format::Num,
        Format::Rgb,
        Format::Gl,
        Format::Lab,
        Format::Lch,
        Format::Hcl,
        Format::Hsl,
        Format::Hsv,
        Format::Hsi,
        Format::Hcg,
        Format::Cmyk,
        Format::Oklab,
        Format::Oklch,
        Format::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Named => "named",
            Format::Hex => "hex",
            Format::Css => "css",
            Format::Num => "num",
            Format::Rgb => "rgb",
            Format::Gl => "gl",
            Format::Lab => "lab",
            Format::Lch => "lch",
            Format::Hcl => "hcl",
            Format::Hsl => "hsl",
            Format::Hsv => "hsv",
            Format::Hsi => "hsi",
            Format::Hcg => "hcg",
            Format::Cmyk => "cmyk",
            Format::Oklab => "oklab",
            Format::Oklch => "oklch",
            Format::Temperature => "temperature",
        }
    }

    /// The channel space read by this format, for array-based formats.
    fn space(self) -> Option<Space> {
        match self {
            Format::Lab => Some(Space::Lab),
            Format::Lch => Some(Space::Lch),
            Format::Hcl => Some(Space::Hcl),
            Format::Hsl => Some(Space::Hsl),
            Format::Hsv => Some(Space::Hsv),
            Format::Hsi => Some(Space::Hsi),
            Format::Hcg => Some(Space::Hcg),
            Format::Cmyk => Some(Space::Cmyk),
            Format::Oklab => Some(Space::Oklab),
            Format::Oklch => Some(Space::Oklch),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "kelvin" | "temp" => Ok(Format::Temperature),
            name => Format::ALL
                .into_iter()
                .find(|f| f.name() == name)
                .ok_or_else(|| ColorError::UnknownFormatName(s.to_string())),
        }
    }
}

/// Decoder for one format: input to unclamped RGBA.
#[derive(Clone, Copy)]
pub struct FormatDescriptor {
    pub format: Format,
    pub decode: Decoder,
}

/// Autodetection rule: if `test` accepts an input, `format` decodes it.
#[derive(Clone, Copy)]
pub struct AutodetectRule {
    pub format: Format,
    pub priority: u8,
    pub test: Test,
}

/// Largest packed `0xRRGGBB` value.
const MAX_NUM: f64 = 16_777_215.0;

fn mismatch(format: Format, input: &Input, expected: &str) -> ColorError {
    ColorError::decode(format.name(), input, format!("expected {expected}"))
}

fn text(format: Format, input: &Input) -> Result<&str> {
    match input {
        Input::Text(s) => Ok(s),
        _ => Err(mismatch(format, input, "a string")),
    }
}

/// Split a channel array into the space channels and an optional alpha.
fn channels<'a>(format: Format, input: &'a Input, n: usize) -> Result<(&'a [f64], f64)> {
    match input {
        Input::Channels(v) if v.len() == n => Ok((v, 1.0)),
        Input::Channels(v) if v.len() == n + 1 => Ok((&v[..n], v[n])),
        _ => Err(mismatch(
            format,
            input,
            &format!("{n} or {} channels", n + 1),
        )),
    }
}

fn decode_named(input: &Input) -> Result<[f64; 4]> {
    let s = text(Format::Named, input)?;
    let hex = named::hex_for(s)
        .ok_or_else(|| ColorError::decode("named", s, "not a known color name"))?;
    hex::parse(hex)
}

fn decode_hex(input: &Input) -> Result<[f64; 4]> {
    hex::parse(text(Format::Hex, input)?)
}

fn decode_css(input: &Input) -> Result<[f64; 4]> {
    css::parse(text(Format::Css, input)?)
}

fn decode_num(input: &Input) -> Result<[f64; 4]> {
    match *input {
        Input::Number(n) if (0.0..=MAX_NUM).contains(&n) => {
            let n = n as u32;
            let r = (n >> 16) & 0xFF;
            let g = (n >> 8) & 0xFF;
            let b = n & 0xFF;
            Ok([f64::from(r), f64::from(g), f64::from(b), 1.0])
        }
        _ => Err(mismatch(Format::Num, input, "a number in 0..=0xffffff")),
    }
}

fn decode_rgb(input: &Input) -> Result<[f64; 4]> {
    let (rgb, a) = channels(Format::Rgb, input, 3)?;
    Ok([rgb[0], rgb[1], rgb[2], a])
}

fn decode_gl(input: &Input) -> Result<[f64; 4]> {
    let (rgb, a) = channels(Format::Gl, input, 3)?;
    Ok([rgb[0] * 255.0, rgb[1] * 255.0, rgb[2] * 255.0, a])
}

fn decode_space(format: Format, input: &Input) -> Result<[f64; 4]> {
    let Some(space) = format.space() else {
        return Err(ColorError::UnknownFormatName(format.name().to_string()));
    };
    let (values, a) = channels(format, input, space.channel_count())?;
    let [r, g, b] = space.to_rgb(values, Illuminant::D65)?;
    Ok([r, g, b, a])
}

fn decode_temperature(input: &Input) -> Result<[f64; 4]> {
    match *input {
        Input::Number(k) if k.is_finite() => {
            let [r, g, b] = temperature::to_rgb(k);
            Ok([r, g, b, 1.0])
        }
        _ => Err(mismatch(Format::Temperature, input, "a temperature in kelvin")),
    }
}

type Decoder = fn(&Input) -> Result<[f64; 4]>;
type Test = fn(&Input) -> bool;

const fn entry(format: Format, decode: Decoder) -> FormatDescriptor {
    FormatDescriptor { format, decode }
}

static REGISTRY: Lazy<Vec<FormatDescriptor>> = Lazy::new(|| {
    let registry = vec![
        entry(Format::Named, decode_named),
        entry(Format::Hex, decode_hex),
        entry(Format::Css, decode_css),
        entry(Format::Num, decode_num),
        entry(Format::Rgb, decode_rgb),
        entry(Format::Gl, decode_gl),
        entry(Format::Lab, |i| decode_space(Format::Lab, i)),
        entry(Format::Lch, |i| decode_space(Format::Lch, i)),
        entry(Format::Hcl, |i| decode_space(Format::Hcl, i)),
        entry(Format::Hsl, |i| decode_space(Format::Hsl, i)),
        entry(Format::Hsv, |i| decode_space(Format::Hsv, i)),
        entry(Format::Hsi, |i| decode_space(Format::Hsi, i)),
        entry(Format::Hcg, |i| decode_space(Format::Hcg, i)),
        entry(Format::Cmyk, |i| decode_space(Format::Cmyk, i)),
        entry(Format::Oklab, |i| decode_space(Format::Oklab, i)),
        entry(Format::Oklch, |i| decode_space(Format::Oklch, i)),
        entry(Format::Temperature, decode_temperature),
    ];
    tracing::debug!(formats = registry.len(), "color format registry initialized");
    registry
});

fn is_channels(input: &Input, n: usize) -> bool {
    matches!(input, Input::Channels(v) if v.len() == n)
}

const fn rule(format: Format, priority: u8, test: Test) -> AutodetectRule {
    AutodetectRule {
        format,
        priority,
        test,
    }
}

static RULES: Lazy<Vec<AutodetectRule>> = Lazy::new(|| {
    let mut rules = vec![
        rule(Format::Named, 5, |i| {
            matches!(i, Input::Text(s) if named::hex_for(s).is_some())
        }),
        rule(Format::Num, 5, |i| {
            matches!(*i, Input::Number(n) if (0.0..=MAX_NUM).contains(&n))
        }),
        rule(Format::Css, 5, |i| matches!(i, Input::Text(s) if css::is_css(s))),
        rule(Format::Hex, 4, |i| {
            matches!(i, Input::Text(s) if (3..=9).contains(&s.trim().len()))
        }),
        rule(Format::Rgb, 3, |i| match i {
            Input::Channels(v) if v.len() == 3 => true,
            Input::Channels(v) if v.len() == 4 => (0.0..=1.0).contains(&v[3]),
            _ => false,
        }),
        rule(Format::Lab, 2, |i| is_channels(i, 3)),
        rule(Format::Lch, 2, |i| is_channels(i, 3)),
        rule(Format::Hcl, 2, |i| is_channels(i, 3)),
        rule(Format::Hsi, 2, |i| is_channels(i, 3)),
        rule(Format::Hsl, 2, |i| is_channels(i, 3)),
        rule(Format::Hsv, 2, |i| is_channels(i, 3)),
        rule(Format::Oklab, 2, |i| is_channels(i, 3)),
        rule(Format::Cmyk, 2, |i| is_channels(i, 4)),
        rule(Format::Oklch, 2, |i| is_channels(i, 3)),
        rule(Format::Hcg, 1, |i| is_channels(i, 3)),
    ];
    rules.sort_by_key(|r| std::cmp::Reverse(r.priority));
    tracing::debug!(rules = rules.len(), "autodetect rules sorted");
    rules
});

/// Decode `input` with an explicit format.
pub fn decode(format: Format, input: &Input) -> Result<[f64; 4]> {
    let descriptor = REGISTRY
        .iter()
        .find(|d| d.format == format)
        .ok_or_else(|| ColorError::UnknownFormatName(format.name().to_string()))?;
    (descriptor.decode)(input)
}

/// Pick the format for `input` using the prioritized rules.
pub fn autodetect(input: &Input) -> Result<Format> {
    let format = RULES
        .iter()
        .find(|rule| (rule.test)(input))
        .map(|rule| rule.format)
        .ok_or_else(|| ColorError::UnknownFormat {
            input: input.to_string(),
        })?;
    tracing::trace!(format = %format, input = %input, "autodetected color format");
    Ok(format)
}

/// Autodetection order, highest priority first.
pub fn rules() -> &'static [AutodetectRule] {
    &RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(input: impl Into<Input>) -> Format {
        autodetect(&input.into()).unwrap()
    }

    #[test]
    fn test_rule_order_is_by_priority_then_registration() {
        let order: Vec<&str> = rules().iter().map(|r| r.format.name()).collect();
        assert_eq!(
            order,
            [
                "named", "num", "css", "hex", "rgb", "lab", "lch", "hcl", "hsi", "hsl", "hsv",
                "oklab", "cmyk", "oklch", "hcg"
            ]
        );
    }

    #[test]
    fn test_autodetect_strings() {
        assert_eq!(detect("red"), Format::Named);
        assert_eq!(detect("#ff0000"), Format::Hex);
        assert_eq!(detect("fff"), Format::Hex);
        assert_eq!(detect("rgb(1, 2, 3)"), Format::Css);
        assert_eq!(detect("transparent"), Format::Css);
    }

    #[test]
    fn test_autodetect_numbers_and_arrays() {
        assert_eq!(detect(0xff0000u32), Format::Num);
        assert_eq!(detect([1.0, 2.0, 3.0]), Format::Rgb);
        assert_eq!(detect([1.0, 2.0, 3.0, 0.5]), Format::Rgb);
        assert_eq!(detect([0.0, 0.5, 0.5, 2.0]), Format::Cmyk);
    }

    #[test]
    fn test_autodetect_failure_names_input() {
        let err = autodetect(&Input::from("no such color at all")).unwrap_err();
        assert_eq!(
            err,
            ColorError::UnknownFormat {
                input: "no such color at all".to_string()
            }
        );
        assert!(autodetect(&Input::Number(-1.0)).is_err());
        assert!(autodetect(&Input::Channels(vec![1.0, 2.0])).is_err());
    }

    #[test]
    fn test_decode_num() {
        let rgba = decode(Format::Num, &Input::from(0x336699u32)).unwrap();
        assert_eq!(rgba, [0x33 as f64, 0x66 as f64, 0x99 as f64, 1.0]);
        assert!(decode(Format::Num, &Input::Number(16_777_216.0)).is_err());
    }

    #[test]
    fn test_decode_channel_formats_take_optional_alpha() {
        let rgba = decode(Format::Hsl, &Input::from([0.0, 1.0, 0.5, 0.3])).unwrap();
        assert_eq!(rgba.map(|c| (c * 1e6).round() / 1e6), [255.0, 0.0, 0.0, 0.3]);
        let rgba = decode(Format::Gl, &Input::from([1.0, 0.5, 0.0])).unwrap();
        assert_eq!(rgba, [255.0, 127.5, 0.0, 1.0]);
        assert!(decode(Format::Cmyk, &Input::from([0.0, 0.0, 0.0])).is_err());
        assert!(decode(Format::Lab, &Input::from("lab")).is_err());
    }

    #[test]
    fn test_format_names() {
        assert_eq!("kelvin".parse::<Format>().unwrap(), Format::Temperature);
        assert_eq!("OKLCH".parse::<Format>().unwrap(), Format::Oklch);
        assert!(matches!(
            "xyz".parse::<Format>(),
            Err(ColorError::UnknownFormatName(_))
        ));
    }
}
