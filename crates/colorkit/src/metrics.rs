//! Luminance, contrast and color difference.

use crate::color::Color;
use crate::interpolate::{mix, Mode};
use crate::space::Space;
use crate::util::{DEG2RAD, RAD2DEG};

const LUMINANCE_EPSILON: f64 = 1e-7;
const LUMINANCE_MAX_ITER: usize = 20;

/// WCAG relative luminance of an sRGB triple (0-255).
pub fn relative_luminance(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb.map(|x| {
        let x = x / 255.0;
        if x <= 0.03928 {
            x / 12.92
        } else {
            ((x + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

impl Color {
    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        let [r, g, b, _] = self.rgb_raw();
        relative_luminance([r, g, b])
    }

    /// A color with the requested luminance, found by bisecting towards black
    /// or white in `mode`. The result is rounded to integer RGB and keeps
    /// this color's alpha.
    pub fn with_luminance(&self, target: f64, mode: Mode) -> Color {
        let alpha = self.alpha();
        if target == 0.0 {
            return Color::from_rgba([0.0, 0.0, 0.0, alpha]);
        }
        if target == 1.0 {
            return Color::from_rgba([255.0, 255.0, 255.0, alpha]);
        }

        let (mut low, mut high) = if self.luminance() > target {
            (Color::from_rgb([0.0, 0.0, 0.0]), *self)
        } else {
            (*self, Color::from_rgb([255.0, 255.0, 255.0]))
        };
        let mut iter = 0;
        let found = loop {
            let mid = mix(&low, &high, 0.5, mode);
            let lum = mid.luminance();
            if (target - lum).abs() < LUMINANCE_EPSILON {
                break mid;
            }
            if iter == LUMINANCE_MAX_ITER {
                tracing::debug!(target, reached = lum, "luminance search hit iteration cap");
                break mid;
            }
            iter += 1;
            if lum > target {
                high = mid;
            } else {
                low = mid;
            }
        };
        let [r, g, b] = found.rgb();
        Color::from_rgba([r, g, b, alpha])
    }
}

/// WCAG 2 contrast ratio, always `>= 1`.
///
/// ```
/// use colorkit::{contrast, Color};
///
/// let black = Color::new("black").unwrap();
/// let white = Color::new("white").unwrap();
/// assert_eq!(contrast(&black, &white), 21.0);
/// ```
pub fn contrast(a: &Color, b: &Color) -> f64 {
    let (l1, l2) = (a.luminance(), b.luminance());
    if l1 > l2 {
        (l1 + 0.05) / (l2 + 0.05)
    } else {
        (l2 + 0.05) / (l1 + 0.05)
    }
}

// APCA 0.0.98G.
const W_OFFSET: f64 = 0.027;
const P_IN: f64 = 0.0005;
const P_OUT: f64 = 0.1;
const R_SCALE: f64 = 1.14;
const B_THRESHOLD: f64 = 0.022;
const B_EXP: f64 = 1.414;

fn apca_luminance(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb.map(|c| (c / 255.0).powf(2.4));
    0.2126729 * r + 0.7151522 * g + 0.072175 * b
}

fn soft_clamp(y: f64) -> f64 {
    if y >= B_THRESHOLD {
        y
    } else {
        y + (B_THRESHOLD - y).powf(B_EXP)
    }
}

/// APCA lightness contrast of `text` on `bg`, roughly `-108..=106`.
///
/// Positive values mean dark text on a light background. Translucent text
/// is composited onto the background first.
pub fn contrast_apca(text: &Color, bg: &Color) -> f64 {
    let text = if text.alpha() < 1.0 {
        mix(bg, text, text.alpha(), Mode::Rgb)
    } else {
        *text
    };
    let y_text = soft_clamp(apca_luminance(text.rgb()));
    let y_bg = soft_clamp(apca_luminance(bg.rgb()));

    let c = if (y_bg - y_text).abs() < P_IN {
        0.0
    } else if y_text < y_bg {
        (y_bg.powf(0.56) - y_text.powf(0.57)) * R_SCALE
    } else {
        (y_bg.powf(0.65) - y_text.powf(0.62)) * R_SCALE
    };
    let s = if c.abs() < P_OUT {
        0.0
    } else if c > 0.0 {
        c - W_OFFSET
    } else {
        c + W_OFFSET
    };
    s * 100.0
}

/// CIEDE2000 parametric weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaEWeights {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Default for DeltaEWeights {
    fn default() -> Self {
        DeltaEWeights {
            l: 1.0,
            c: 1.0,
            h: 1.0,
        }
    }
}

/// CIEDE2000 color difference on D65 Lab, clamped to `[0, 100]`.
pub fn delta_e(a: &Color, b: &Color, weights: DeltaEWeights) -> f64 {
    let [l1, a1, b1] = a.lab();
    let [l2, a2, b2] = b.lab();

    let avg_l = (l1 + l2) / 2.0;
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let avg_c = (c1 + c2) / 2.0;
    let g = 0.5 * (1.0 - (avg_c.powi(7) / (avg_c.powi(7) + 25f64.powi(7))).sqrt());
    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let avg_cp = (c1p + c2p) / 2.0;

    let hue = |b: f64, ap: f64| {
        let h = b.atan2(ap) * RAD2DEG;
        if h >= 0.0 {
            h
        } else {
            h + 360.0
        }
    };
    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);
    let avg_hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };
    let t = 1.0 - 0.17 * ((avg_hp - 30.0) * DEG2RAD).cos()
        + 0.24 * ((2.0 * avg_hp) * DEG2RAD).cos()
        + 0.32 * ((3.0 * avg_hp + 6.0) * DEG2RAD).cos()
        - 0.2 * ((4.0 * avg_hp - 63.0) * DEG2RAD).cos();

    let mut dhp = h2p - h1p;
    if dhp.abs() > 180.0 {
        dhp += if h2p <= h1p { 360.0 } else { -360.0 };
    }
    let dhp = 2.0 * (c1p * c2p).sqrt() * (dhp * DEG2RAD / 2.0).sin();
    let dl = l2 - l1;
    let dcp = c2p - c1p;

    let sl = 1.0 + 0.015 * (avg_l - 50.0).powi(2) / (20.0 + (avg_l - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * avg_cp;
    let sh = 1.0 + 0.015 * avg_cp * t;
    let d_theta = 30.0 * (-((avg_hp - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * (avg_cp.powi(7) / (avg_cp.powi(7) + 25f64.powi(7))).sqrt();
    let rt = -rc * (2.0 * d_theta * DEG2RAD).sin();

    let tl = dl / (weights.l * sl);
    let tc = dcp / (weights.c * sc);
    let th = dhp / (weights.h * sh);
    let result = (tl * tl + tc * tc + th * th + rt * tc * th).sqrt();
    result.clamp(0.0, 100.0)
}

/// Euclidean distance between the channel vectors of `a` and `b` in
/// `space`. Undefined (NaN) channels count as 0.
pub fn distance(a: &Color, b: &Color, space: Space) -> f64 {
    let zero_nan = |v: f64| if v.is_nan() { 0.0 } else { v };
    a.channels(space)
        .into_iter()
        .zip(b.channels(space))
        .map(|(x, y)| {
            let d = zero_nan(x) - zero_nan(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
