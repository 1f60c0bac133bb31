//! HSV: hue in degrees, saturation and value in `[0, 1]`.

pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let v = max / 255.0;

    if max == 0.0 {
        return [f64::NAN, 0.0, v];
    }
    let s = delta / max;
    if delta == 0.0 {
        return [f64::NAN, s, v];
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
    [h, s, v]
}

pub fn to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    let v = v * 255.0;
    if s == 0.0 {
        return [v, v, v];
    }
    sextant(h, v, v * (1.0 - s), |f| v * (1.0 - s * f), |f| v * (1.0 - s * (1.0 - f)))
}

/// Shared hexcone lookup for HSV and HCG.
///
/// `q` and `t` receive the fractional position inside the sextant.
pub(crate) fn sextant(
    h: f64,
    v: f64,
    p: f64,
    q: impl Fn(f64) -> f64,
    t: impl Fn(f64) -> f64,
) -> [f64; 3] {
    let mut h = if h.is_nan() { 0.0 } else { h };
    if h == 360.0 {
        h = 0.0;
    }
    if h > 360.0 {
        h -= 360.0;
    }
    if h < 0.0 {
        h += 360.0;
    }
    let h = h / 60.0;
    let i = h.floor();
    let f = h - i;
    let (q, t) = (q(f), t(f));
    match i as i32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(from_rgb([255.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(from_rgb([0.0, 0.0, 255.0]), [240.0, 1.0, 1.0]);
        assert_eq!(to_rgb([120.0, 1.0, 1.0]), [0.0, 255.0, 0.0]);
    }

    #[test]
    fn test_black_and_gray() {
        let black = from_rgb([0.0, 0.0, 0.0]);
        assert!(black[0].is_nan());
        assert_eq!(black[1], 0.0);

        let gray = from_rgb([100.0, 100.0, 100.0]);
        assert!(gray[0].is_nan());
        assert_eq!(gray[1], 0.0);
    }

    #[test]
    fn test_hue_360_wraps_to_red() {
        assert_eq!(to_rgb([360.0, 1.0, 1.0]), [255.0, 0.0, 0.0]);
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
