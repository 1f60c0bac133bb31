//! HSI: hue in degrees, saturation and intensity in `[0, 1]`.

use crate::util::{limit, PI_THIRD, TWO_PI};

pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let i = (r + g + b) / 3.0;
    let s = if i > 0.0 { 1.0 - min / i } else { 0.0 };
    if s == 0.0 {
        return [f64::NAN, s, i];
    }
    let mut h = (r - g + (r - b)) / 2.0;
    h /= ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
    // Rounding can push the cosine a hair outside [-1, 1].
    h = limit(h, -1.0, 1.0).acos();
    if b > g {
        h = TWO_PI - h;
    }
    [h / TWO_PI * 360.0, s, i]
}

/// `[h, s, i]` to sRGB (0-255). Undefined hue or saturation reads as 0.
pub fn to_rgb(hsi: [f64; 3]) -> [f64; 3] {
    let [h, s, i] = hsi;
    let mut h = if h.is_nan() { 0.0 } else { h };
    let s = if s.is_nan() { 0.0 } else { s };
    if h > 360.0 {
        h -= 360.0;
    }
    if h < 0.0 {
        h += 360.0;
    }
    let mut h = h / 360.0;

    let lobe = |h: f64| (1.0 + s * (TWO_PI * h).cos() / (PI_THIRD - TWO_PI * h).cos()) / 3.0;
    let (r, g, b);
    if h < 1.0 / 3.0 {
        b = (1.0 - s) / 3.0;
        r = lobe(h);
        g = 1.0 - (b + r);
    } else if h < 2.0 / 3.0 {
        h -= 1.0 / 3.0;
        r = (1.0 - s) / 3.0;
        g = lobe(h);
        b = 1.0 - (r + g);
    } else {
        h -= 2.0 / 3.0;
        g = (1.0 - s) / 3.0;
        b = lobe(h);
        r = 1.0 - (g + b);
    }
    [r, g, b].map(|c| limit(i * c * 3.0, 0.0, 1.0) * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red() {
        let hsi = from_rgb([255.0, 0.0, 0.0]);
        assert!(hsi[0].abs() < 1e-9, "h = {}", hsi[0]);
        assert_eq!(hsi[1], 1.0);
        assert!((hsi[2] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_gray_hue_is_nan() {
        let hsi = from_rgb([50.0, 50.0, 50.0]);
        assert!(hsi[0].is_nan());
        assert_eq!(hsi[1], 0.0);
    }

    #[test]
    fn test_round_trip() {
        for rgb in [[255.0, 0.0, 0.0], [20.0, 120.0, 220.0], [180.0, 90.0, 60.0]] {
            let back = to_rgb(from_rgb(rgb));
            for i in 0..3 {
                assert!((rgb[i] - back[i]).abs() < 1e-6, "{:?} -> {:?}", rgb, back);
            }
        }
    }
}
