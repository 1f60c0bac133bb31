//! CSS color strings.
//!
//! Parsing accepts CSS Color 4 space/slash syntax for `rgb()`, `hsl()`,
//! `lab()`, `lch()`, `oklab()` and `oklch()`, the legacy comma forms of
//! `rgb()/rgba()/hsl()/hsla()`, named colors and `transparent`. Channels
//! may be percentages or `none` (read as 0). `lab()` and `lch()` literals
//! are relative to D50, as CSS defines them.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::named;
use crate::error::{ColorError, Result};
use crate::space::{hsl, lab, lch, oklab, Illuminant};
use crate::util::{limit, rnd2, rnd3, round_half_up};

const INT_OR_PCT: &str = r"((?:-?\d+)|(?:-?\d+(?:\.\d+)?)%|none)";
const FLOAT_OR_PCT: &str = r"((?:-?(?:\d+(?:\.\d*)?|\.\d+)%?)|none)";
const PCT: &str = r"((?:-?(?:\d+(?:\.\d*)?|\.\d+)%)|none)";
const ANGLE: &str = r"((?:-?(?:\d+(?:\.\d*)?|\.\d+)(?:deg)?)|none)";
const ALPHA: &str = r"\s*(?:/\s*((?:[01]|[01]?\.\d+)|\d+(?:\.\d+)?%))?";

struct Patterns {
    rgb: Regex,
    rgb_legacy: Regex,
    rgba_legacy: Regex,
    hsl: Regex,
    hsl_legacy: Regex,
    hsla_legacy: Regex,
    lab: Regex,
    lch: Regex,
    oklab: Regex,
    oklch: Regex,
}

fn modern(func: &str, channels: [&str; 3]) -> Regex {
    let pattern = format!(r"^{func}\(\s*{}{ALPHA}\)$", channels.join(r"\s+"));
    Regex::new(&pattern).expect("css pattern is valid")
}

fn legacy(func: &str, channels: &[&str]) -> Regex {
    let pattern = format!(r"^{func}\(\s*{}\s*\)$", channels.join(r"\s*,\s*"));
    Regex::new(&pattern).expect("css pattern is valid")
}

static PATTERNS: Lazy<Patterns> = Lazy::new(|| {
    tracing::debug!("compiling css color patterns");
    Patterns {
        rgb: modern("rgba?", [INT_OR_PCT; 3]),
        rgb_legacy: legacy("rgb", &[INT_OR_PCT; 3]),
        rgba_legacy: legacy("rgba", &[INT_OR_PCT, INT_OR_PCT, INT_OR_PCT, FLOAT_OR_PCT]),
        hsl: modern("hsla?", [ANGLE, PCT, PCT]),
        hsl_legacy: legacy("hsl", &[ANGLE, PCT, PCT]),
        hsla_legacy: Regex::new(
            r"^hsla\(\s*(-?\d+(?:\.\d+)?),\s*(-?\d+(?:\.\d+)?)%\s*,\s*(-?\d+(?:\.\d+)?)%\s*,\s*([01]|[01]?\.\d+)\)$",
        )
        .expect("css pattern is valid"),
        lab: modern("lab", [FLOAT_OR_PCT; 3]),
        lch: modern("lch", [FLOAT_OR_PCT, FLOAT_OR_PCT, ANGLE]),
        oklab: modern("oklab", [FLOAT_OR_PCT; 3]),
        oklch: modern("oklch", [FLOAT_OR_PCT, FLOAT_OR_PCT, ANGLE]),
    }
});

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether `input` looks like a CSS color function or `transparent`.
///
/// Named colors are not included; they have their own format.
pub fn is_css(input: &str) -> bool {
    let s = normalize(input);
    let p = &*PATTERNS;
    s == "transparent"
        || [
            &p.rgb,
            &p.hsl,
            &p.lab,
            &p.lch,
            &p.oklab,
            &p.oklch,
            &p.rgb_legacy,
            &p.rgba_legacy,
            &p.hsl_legacy,
            &p.hsla_legacy,
        ]
        .iter()
        .any(|re| re.is_match(&s))
}

/// Parse a CSS color into unclamped RGBA.
pub fn parse(input: &str) -> Result<[f64; 4]> {
    let s = normalize(input);
    if s == "transparent" {
        return Ok([0.0, 0.0, 0.0, 0.0]);
    }
    if let Some(hex) = named::hex_for(&s) {
        return super::hex::parse(hex);
    }

    let p = &*PATTERNS;
    let err = |reason: &str| ColorError::decode("css", input, reason);
    let num = |text: &str| -> Result<f64> {
        text.parse::<f64>()
            .map_err(|_| err(&format!("invalid number {text:?}")))
    };
    // Percentages map onto [min, max]; signed ones map -100%..100% instead.
    let channel = |caps: &Captures, i: usize, min: f64, max: f64, signed: bool| -> Result<f64> {
        let text = caps.get(i).map_or("none", |m| m.as_str());
        if text == "none" {
            return Ok(0.0);
        }
        match text.strip_suffix('%') {
            Some(pct) => {
                let p = num(pct)? / 100.0;
                Ok(if signed {
                    min + (p + 1.0) * 0.5 * (max - min)
                } else {
                    min + p * (max - min)
                })
            }
            None => num(text),
        }
    };
    let angle = |caps: &Captures, i: usize| -> Result<f64> {
        match caps.get(i).map(|m| m.as_str()) {
            None | Some("none") => Ok(0.0),
            Some(text) => num(text.trim_end_matches("deg")),
        }
    };
    let alpha = |caps: &Captures, i: usize| -> Result<f64> {
        match caps.get(i) {
            Some(_) => channel(caps, i, 0.0, 1.0, false),
            None => Ok(1.0),
        }
    };
    let finish = |rgb: [f64; 3], a: f64| -> [f64; 4] {
        let [r, g, b] = rgb.map(|c| limit(round_half_up(c), 0.0, 255.0));
        [r, g, b, a]
    };

    if let Some(caps) = p.rgb.captures(&s).or_else(|| p.rgb_legacy.captures(&s)) {
        let rgb = [
            channel(&caps, 1, 0.0, 255.0, false)?,
            channel(&caps, 2, 0.0, 255.0, false)?,
            channel(&caps, 3, 0.0, 255.0, false)?,
        ];
        return Ok(finish(rgb, alpha(&caps, 4)?));
    }

    if let Some(caps) = p.rgba_legacy.captures(&s) {
        return Ok([
            channel(&caps, 1, 0.0, 255.0, false)?,
            channel(&caps, 2, 0.0, 255.0, false)?,
            channel(&caps, 3, 0.0, 255.0, false)?,
            channel(&caps, 4, 0.0, 1.0, false)?,
        ]);
    }

    if let Some(caps) = p.hsl.captures(&s).or_else(|| p.hsl_legacy.captures(&s)) {
        let hsl = [
            angle(&caps, 1)?,
            channel(&caps, 2, 0.0, 100.0, false)? * 0.01,
            channel(&caps, 3, 0.0, 100.0, false)? * 0.01,
        ];
        return Ok(finish(hsl::to_rgb(hsl), alpha(&caps, 4)?));
    }

    if let Some(caps) = p.hsla_legacy.captures(&s) {
        let hsl = [
            num(&caps[1])?,
            num(&caps[2])? * 0.01,
            num(&caps[3])? * 0.01,
        ];
        return Ok(finish(hsl::to_rgb(hsl), num(&caps[4])?));
    }

    if let Some(caps) = p.lab.captures(&s) {
        let lab = [
            channel(&caps, 1, 0.0, 100.0, false)?,
            channel(&caps, 2, -125.0, 125.0, true)?,
            channel(&caps, 3, -125.0, 125.0, true)?,
        ];
        return Ok(finish(lab::to_rgb(lab, Illuminant::D50), alpha(&caps, 4)?));
    }

    if let Some(caps) = p.lch.captures(&s) {
        let lch = [
            channel(&caps, 1, 0.0, 100.0, false)?,
            channel(&caps, 2, 0.0, 150.0, false)?,
            angle(&caps, 3)?,
        ];
        return Ok(finish(lch::to_rgb(lch, Illuminant::D50), alpha(&caps, 4)?));
    }

    if let Some(caps) = p.oklab.captures(&s) {
        let ok = [
            channel(&caps, 1, 0.0, 1.0, false)?,
            channel(&caps, 2, -0.4, 0.4, true)?,
            channel(&caps, 3, -0.4, 0.4, true)?,
        ];
        return Ok(finish(oklab::to_rgb(ok), alpha(&caps, 4)?));
    }

    if let Some(caps) = p.oklch.captures(&s) {
        let ok = [
            channel(&caps, 1, 0.0, 1.0, false)?,
            channel(&caps, 2, 0.0, 0.4, false)?,
            angle(&caps, 3)?,
        ];
        return Ok(finish(lch::oklch_to_rgb(ok), alpha(&caps, 4)?));
    }

    Err(err("not a recognized css color"))
}

/// Output syntax for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssMode {
    #[default]
    Rgb,
    /// `rgb()` that always carries an alpha component.
    Rgba,
    Hsl,
    /// `hsl()` that always carries an alpha component.
    Hsla,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl CssMode {
    pub const ALL: [CssMode; 8] = [
        CssMode::Rgb,
        CssMode::Rgba,
        CssMode::Hsl,
        CssMode::Hsla,
        CssMode::Lab,
        CssMode::Lch,
        CssMode::Oklab,
        CssMode::Oklch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CssMode::Rgb => "rgb",
            CssMode::Rgba => "rgba",
            CssMode::Hsl => "hsl",
            CssMode::Hsla => "hsla",
            CssMode::Lab => "lab",
            CssMode::Lch => "lch",
            CssMode::Oklab => "oklab",
            CssMode::Oklch => "oklch",
        }
    }
}

impl fmt::Display for CssMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssMode {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CssMode::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ColorError::UnknownFormatName(s.to_string()))
    }
}

fn hue_text(h: f64) -> String {
    if h.is_nan() {
        "none".to_string()
    } else {
        format!("{}deg", rnd2(h))
    }
}

/// Write RGBA as a CSS color string.
///
/// An alpha component (`/ a`) is appended when the color is translucent or
/// the mode asks for it.
pub fn format(rgba: [f64; 4], mode: CssMode) -> String {
    let [r, g, b, a] = rgba;
    let rgb = [r, g, b];
    let forced = matches!(mode, CssMode::Rgba | CssMode::Hsla);
    let alpha = if forced || a < 1.0 {
        format!(" / {}", rnd3(a))
    } else {
        String::new()
    };

    match mode {
        CssMode::Rgb | CssMode::Rgba => {
            let [r, g, b] = rgb.map(round_half_up);
            format!("rgb({r} {g} {b}{alpha})")
        }
        CssMode::Hsl | CssMode::Hsla => {
            let [h, s, l] = hsl::from_rgb(rgb);
            let h = if h.is_nan() { 0.0 } else { h };
            format!(
                "hsl({}deg {}% {}%{alpha})",
                rnd2(h),
                rnd2(s * 100.0),
                rnd2(l * 100.0)
            )
        }
        CssMode::Lab => {
            let [l, a, b] = lab::from_rgb(rgb, Illuminant::D50);
            format!("lab({}% {} {}{alpha})", rnd2(l), rnd2(a), rnd2(b))
        }
        CssMode::Lch => {
            let [l, c, h] = lch::from_rgb(rgb, Illuminant::D50);
            format!("lch({}% {} {}{alpha})", rnd2(l), rnd2(c), hue_text(h))
        }
        CssMode::Oklab => {
            let [l, a, b] = oklab::from_rgb(rgb);
            format!("oklab({}% {} {}{alpha})", rnd2(l * 100.0), rnd3(a), rnd3(b))
        }
        CssMode::Oklch => {
            let [l, c, h] = lch::oklch_from_rgb(rgb);
            format!("oklch({}% {} {}{alpha})", rnd2(l * 100.0), rnd3(c), hue_text(h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(s: &str) -> [f64; 4] {
        parse(s).unwrap_or_else(|e| panic!("{s}: {e}"))
    }

    #[test]
    fn test_legacy_rgb() {
        assert_eq!(rgba("rgb(255, 0, 0)"), [255.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba("rgba(0, 128, 255, 0.5)"), [0.0, 128.0, 255.0, 0.5]);
        assert_eq!(rgba("RGBA(0,128,255,50%)"), [0.0, 128.0, 255.0, 0.5]);
    }

    #[test]
    fn test_modern_rgb() {
        assert_eq!(rgba("rgb(255 0 0)"), [255.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba("rgb(100% 50% 0% / 0.25)"), [255.0, 128.0, 0.0, 0.25]);
        assert_eq!(rgba("rgb(none 10 20 / 40%)"), [0.0, 10.0, 20.0, 0.4]);
    }

    #[test]
    fn test_hsl_forms() {
        assert_eq!(rgba("hsl(0 100% 50%)"), [255.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba("hsl(120deg, 100%, 50%)"), [0.0, 255.0, 0.0, 1.0]);
        assert_eq!(rgba("hsla(240, 100%, 50%, 0.3)"), [0.0, 0.0, 255.0, 0.3]);
        assert_eq!(rgba("hsl(240 100% 50% / .5)"), [0.0, 0.0, 255.0, 0.5]);
    }

    #[test]
    fn test_lab_family_round_trips_through_format() {
        for mode in [CssMode::Lab, CssMode::Lch, CssMode::Oklab, CssMode::Oklch] {
            let text = format([255.0, 0.0, 0.0, 1.0], mode);
            assert_eq!(rgba(&text), [255.0, 0.0, 0.0, 1.0], "{mode}: {text}");
        }
    }

    #[test]
    fn test_named_and_transparent() {
        assert_eq!(rgba("  Red "), [255.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba("transparent"), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("rgb(1, 2)").is_err());
        assert!(parse("rgb(1.5, 2, 3)").is_err());
        assert!(parse("hsl(10 20 30)").is_err());
        assert!(!is_css("rgb(1, 2)"));
        assert!(is_css("oklch(70% 0.1 120)"));
        assert!(is_css("transparent"));
    }

    #[test]
    fn test_format_rgb() {
        assert_eq!(format([255.0, 0.0, 0.0, 1.0], CssMode::Rgb), "rgb(255 0 0)");
        assert_eq!(format([255.0, 0.0, 0.0, 0.5], CssMode::Rgb), "rgb(255 0 0 / 0.5)");
        assert_eq!(format([255.0, 0.0, 0.0, 1.0], CssMode::Rgba), "rgb(255 0 0 / 1)");
        let half = crate::io::hex::parse("#ff000080").unwrap();
        assert_eq!(format(half, CssMode::Rgb), "rgb(255 0 0 / 0.502)");
    }

    #[test]
    fn test_format_hsl() {
        assert_eq!(format([255.0, 0.0, 0.0, 1.0], CssMode::Hsl), "hsl(0deg 100% 50%)");
        assert_eq!(
            format([128.0, 128.0, 128.0, 1.0], CssMode::Hsl),
            "hsl(0deg 0% 50.2%)"
        );
    }

    #[test]
    fn test_format_lch_gray_has_none_hue() {
        let text = format([128.0, 128.0, 128.0, 1.0], CssMode::Lch);
        assert!(text.ends_with(" none)"), "{text}");
    }
}
