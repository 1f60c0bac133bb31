//! HCG (hue, chroma, grayness), all non-hue channels in `[0, 1]`.

use super::hsv::sextant;

pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let c = delta / 255.0;
    let gray = if delta < 255.0 { min / (255.0 - delta) } else { 0.0 };

    if delta == 0.0 {
        return [f64::NAN, c, gray];
    }
    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    [h, c, gray]
}

pub fn to_rgb(hcg: [f64; 3]) -> [f64; 3] {
    let [h, c, gray] = hcg;
    let g = gray * 255.0;
    if c == 0.0 {
        return [g, g, g];
    }
    let cc = c * 255.0;
    let p = g * (1.0 - c);
    sextant(h, p + cc, p, |f| p + cc * (1.0 - f), |f| p + cc * f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_hue_has_full_chroma() {
        assert_eq!(from_rgb([255.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_eq!(to_rgb([0.0, 1.0, 0.0]), [255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gray_keeps_grayness() {
        let hcg = from_rgb([51.0, 51.0, 51.0]);
        assert!(hcg[0].is_nan());
        assert_eq!(hcg[1], 0.0);
        assert!((hcg[2] - 0.2).abs() < 1e-12);
        assert_eq!(to_rgb(hcg), [51.0, 51.0, 51.0]);
    }

    #[test]
    fn test_round_trip() {
        for rgb in [[255.0, 128.0, 0.0], [10.0, 20.0, 30.0], [200.0, 10.0, 180.0]] {
            let back = to_rgb(from_rgb(rgb));
            for i in 0..3 {
                assert!((rgb[i] - back[i]).abs() < 1e-9, "{:?} -> {:?}", rgb, back);
            }
        }
    }
}
