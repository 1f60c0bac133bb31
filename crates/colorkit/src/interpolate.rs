//! Interpolation between two colors.
//!
//! Each [`Mode`] maps to one strategy, a plain `fn(&Color, &Color, f64)`.
//! Strategies only produce the color channels; [`mix`] interpolates alpha
//! linearly on top of whichever strategy runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::input::{Format, Input};
use crate::space::{hcg, hsi, hsl, hsv, lab, lch, oklab, Illuminant};
use crate::util::{lerp, wrap_hue};

/// Interpolation strategy.
pub type Interpolator = fn(&Color, &Color, f64) -> Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Rgb,
    /// RGB with channels squared before interpolation (approximate linear
    /// light).
    #[default]
    Lrgb,
    Lab,
    Hsl,
    Hsv,
    Hsi,
    Hcg,
    Lch,
    /// Same strategy as [`Mode::Lch`].
    Hcl,
    Oklab,
    Oklch,
    /// Interpolate the packed `0xRRGGBB` integer.
    Num,
}

impl Mode {
    pub const ALL: [Mode; 12] = [
        Mode::Rgb,
        Mode::Lrgb,
        Mode::Lab,
        Mode::Hsl,
        Mode::Hsv,
        Mode::Hsi,
        Mode::Hcg,
        Mode::Lch,
        Mode::Hcl,
        Mode::Oklab,
        Mode::Oklch,
        Mode::Num,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Rgb => "rgb",
            Mode::Lrgb => "lrgb",
            Mode::Lab => "lab",
            Mode::Hsl => "hsl",
            Mode::Hsv => "hsv",
            Mode::Hsi => "hsi",
            Mode::Hcg => "hcg",
            Mode::Lch => "lch",
            Mode::Hcl => "hcl",
            Mode::Oklab => "oklab",
            Mode::Oklch => "oklch",
            Mode::Num => "num",
        }
    }

    pub fn strategy(self) -> Interpolator {
        match self {
            Mode::Rgb => rgb,
            Mode::Lrgb => lrgb,
            Mode::Lab => lab_mode,
            Mode::Oklab => oklab_mode,
            Mode::Hsl => |a, b, f| hue_mode(Cylinder::Hsl, a, b, f),
            Mode::Hsv => |a, b, f| hue_mode(Cylinder::Hsv, a, b, f),
            Mode::Hsi => |a, b, f| hue_mode(Cylinder::Hsi, a, b, f),
            Mode::Hcg => |a, b, f| hue_mode(Cylinder::Hcg, a, b, f),
            Mode::Lch | Mode::Hcl => |a, b, f| hue_mode(Cylinder::Hcl, a, b, f),
            Mode::Oklch => |a, b, f| hue_mode(Cylinder::Oklch, a, b, f),
            Mode::Num => num,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ColorError::UnknownMode(s.to_string()))
    }
}

/// Mix two colors: `f = 0` gives `a`, `f = 1` gives `b`.
///
/// ```
/// use colorkit::{mix, Color, HexMode, Mode};
///
/// let black = Color::new("black").unwrap();
/// let white = Color::new("white").unwrap();
/// assert_eq!(mix(&black, &white, 0.5, Mode::Rgb).hex(HexMode::Auto), "#808080");
/// ```
pub fn mix(a: &Color, b: &Color, f: f64, mode: Mode) -> Color {
    let out = (mode.strategy())(a, b, f);
    out.with_alpha(lerp(a.alpha(), b.alpha(), f))
}

/// [`mix`] on anything that converts into a color.
pub fn mix_inputs(
    a: impl Into<Input>,
    b: impl Into<Input>,
    f: f64,
    mode: Mode,
) -> Result<Color> {
    Ok(mix(&Color::new(a)?, &Color::new(b)?, f, mode))
}

fn lerp3(a: [f64; 3], b: [f64; 3], f: f64) -> [f64; 3] {
    [lerp(a[0], b[0], f), lerp(a[1], b[1], f), lerp(a[2], b[2], f)]
}

fn rgb3(c: &Color) -> [f64; 3] {
    let [r, g, b, _] = c.rgb_raw();
    [r, g, b]
}

fn rgb(a: &Color, b: &Color, f: f64) -> Color {
    Color::from_rgb(lerp3(rgb3(a), rgb3(b), f))
}

fn lrgb(a: &Color, b: &Color, f: f64) -> Color {
    let (x, y) = (rgb3(a), rgb3(b));
    Color::from_rgb([0, 1, 2].map(|i| (x[i] * x[i] * (1.0 - f) + y[i] * y[i] * f).sqrt()))
}

fn lab_mode(a: &Color, b: &Color, f: f64) -> Color {
    Color::from_rgb(lab::to_rgb(lerp3(a.lab(), b.lab(), f), Illuminant::D65))
}

fn oklab_mode(a: &Color, b: &Color, f: f64) -> Color {
    Color::from_rgb(oklab::to_rgb(lerp3(a.oklab(), b.oklab(), f)))
}

fn num(a: &Color, b: &Color, f: f64) -> Color {
    let (x, y) = (f64::from(a.num()), f64::from(b.num()));
    Color::with_format(lerp(x, y, f), Format::Num).unwrap_or(*a)
}

/// Cylindrical spaces, each read as `[hue, saturation-like, lightness-like]`.
#[derive(Clone, Copy, PartialEq)]
enum Cylinder {
    Hsl,
    Hsv,
    Hsi,
    Hcg,
    Hcl,
    Oklch,
}

impl Cylinder {
    fn read(self, c: &Color) -> [f64; 3] {
        match self {
            Cylinder::Hsl => c.hsl(),
            Cylinder::Hsv => c.hsv(),
            Cylinder::Hsi => c.hsi(),
            Cylinder::Hcg => c.hcg(),
            Cylinder::Hcl => c.hcl(),
            Cylinder::Oklch => {
                let [l, ch, h] = c.oklch();
                [h, ch, l]
            }
        }
    }

    fn write(self, [h, s, l]: [f64; 3]) -> [f64; 3] {
        match self {
            Cylinder::Hsl => hsl::to_rgb([h, s, l]),
            Cylinder::Hsv => hsv::to_rgb([h, s, l]),
            Cylinder::Hsi => hsi::to_rgb([h, s, l]),
            Cylinder::Hcg => hcg::to_rgb([h, s, l]),
            Cylinder::Hcl => lch::to_rgb([l, s, h], Illuminant::D65),
            Cylinder::Oklch => lch::oklch_to_rgb([l, s, h]),
        }
    }
}

/// Shortest-arc hue interpolation.
///
/// When exactly one end is achromatic (NaN hue) the other end's hue is used.
/// If that achromatic end is pure black or white (lightness-like channel
/// exactly 0 or 1) its saturation is taken from the chromatic end as well,
/// except in HSV.
fn hue_mode(cyl: Cylinder, a: &Color, b: &Color, f: f64) -> Color {
    let [h0, s0, l0] = cyl.read(a);
    let [h1, s1, l1] = cyl.read(b);
    let extreme = |l: f64| l == 0.0 || l == 1.0;

    let mut sat = None;
    let hue = match (h0.is_nan(), h1.is_nan()) {
        (false, false) => {
            let dh = if h1 > h0 && h1 - h0 > 180.0 {
                h1 - (h0 + 360.0)
            } else if h1 < h0 && h0 - h1 > 180.0 {
                h1 + 360.0 - h0
            } else {
                h1 - h0
            };
            wrap_hue(h0 + f * dh)
        }
        (false, true) => {
            if extreme(l1) && cyl != Cylinder::Hsv {
                sat = Some(s0);
            }
            h0
        }
        (true, false) => {
            if extreme(l0) && cyl != Cylinder::Hsv {
                sat = Some(s1);
            }
            h1
        }
        (true, true) => f64::NAN,
    };
    let sat = sat.unwrap_or_else(|| lerp(s0, s1, f));
    Color::from_rgb(cyl.write([hue, sat, lerp(l0, l1, f)]))
}
