//! Cylindrical forms of Lab and OKLab.
//!
//! Hue is in degrees `[0, 360)` and is NaN when the chroma rounds to zero
//! at four decimals, so achromatic colors carry no hue.

use super::whitepoint::Illuminant;
use super::{lab, oklab};
use crate::util::{DEG2RAD, RAD2DEG};

/// `[L, a, b]` to `[L, C, h]`.
pub fn from_lab(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let c = (a * a + b * b).sqrt();
    let h = if (c * 1e4).round() == 0.0 {
        f64::NAN
    } else {
        (b.atan2(a) * RAD2DEG + 360.0) % 360.0
    };
    [l, c, h]
}

/// `[L, C, h]` to `[L, a, b]`. An undefined hue is read as 0.
pub fn to_lab(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let h = if h.is_nan() { 0.0 } else { h * DEG2RAD };
    [l, h.cos() * c, h.sin() * c]
}

/// sRGB (0-255) to CIE LCh(ab) against `white`.
pub fn from_rgb(rgb: [f64; 3], white: Illuminant) -> [f64; 3] {
    from_lab(lab::from_rgb(rgb, white))
}

pub fn to_rgb(lch: [f64; 3], white: Illuminant) -> [f64; 3] {
    lab::to_rgb(to_lab(lch), white)
}

/// sRGB (0-255) to OKLCh.
pub fn oklch_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    from_lab(oklab::from_rgb(rgb))
}

pub fn oklch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    oklab::to_rgb(to_lab(lch))
}
