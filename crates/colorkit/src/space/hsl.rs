//! HSL: hue in degrees, saturation and lightness in `[0, 1]`.

/// sRGB (0-255) to `[h, s, l]`. Hue is NaN for grays.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [f64::NAN, 0.0, l];
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
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
    [h, s, l]
}

/// `[h, s, l]` to sRGB (0-255). An undefined hue is read as 0.
pub fn to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    if s == 0.0 {
        let v = l * 255.0;
        return [v, v, v];
    }
    let h = if h.is_nan() { 0.0 } else { h };

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;
    let h = h / 360.0;

    [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|mut t| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let c = if 6.0 * t < 1.0 {
            t1 + (t2 - t1) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            t2
        } else if 3.0 * t < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t) * 6.0
        } else {
            t1
        };
        c * 255.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(from_rgb([255.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_eq!(from_rgb([0.0, 255.0, 0.0]), [120.0, 1.0, 0.5]);
        assert_eq!(from_rgb([0.0, 0.0, 255.0]), [240.0, 1.0, 0.5]);
    }

    #[test]
    fn test_gray_has_nan_hue_and_zero_saturation() {
        let hsl = from_rgb([128.0, 128.0, 128.0]);
        assert!(hsl[0].is_nan());
        assert_eq!(hsl[1], 0.0);
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

    #[test]
    fn test_nan_hue_with_saturation_reads_as_red() {
        let rgb = to_rgb([f64::NAN, 1.0, 0.5]);
        assert_eq!(rgb, to_rgb([0.0, 1.0, 0.5]));
    }
}
