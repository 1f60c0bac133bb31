//! Small numeric helpers shared by the codecs.

use std::f64::consts::PI;

pub(crate) const TWO_PI: f64 = PI * 2.0;
pub(crate) const PI_THIRD: f64 = PI / 3.0;
pub(crate) const DEG2RAD: f64 = PI / 180.0;
pub(crate) const RAD2DEG: f64 = 180.0 / PI;

/// Clamp `x` into `[low, high]`. NaN collapses to `low`.
#[inline]
pub(crate) fn limit(x: f64, low: f64, high: f64) -> f64 {
    x.max(low).min(high)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + f * (b - a)
}

/// Round half towards positive infinity, so `-2.5` becomes `-2` and `2.5`
/// becomes `3`. Negative zero is normalized to zero.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    let r = if x - r == 0.5 { r + 1.0 } else { r };
    r + 0.0
}

/// Round to two decimals, for CSS output.
#[inline]
pub(crate) fn rnd2(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0 + 0.0
}

/// Round to three decimals, for OKLab channels in CSS output.
#[inline]
pub(crate) fn rnd3(x: f64) -> f64 {
    round_half_up(x * 1000.0) / 1000.0 + 0.0
}

/// Row-major 3x3 matrix times column vector.
#[inline]
pub(crate) fn mat3_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Normalize a hue into `[0, 360)`. NaN stays NaN.
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamps_and_swallows_nan() {
        assert_eq!(limit(300.0, 0.0, 255.0), 255.0);
        assert_eq!(limit(-3.0, 0.0, 255.0), 0.0);
        assert_eq!(limit(0.25, 0.0, 1.0), 0.25);
        assert_eq!(limit(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_round_half_up_matches_css_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert!(round_half_up(-0.4).is_sign_positive());
    }

    #[test]
    fn test_rnd2_and_rnd3() {
        assert_eq!(rnd2(53.240788867616104), 53.24);
        assert_eq!(rnd2(-0.001), 0.0);
        assert!(rnd2(-0.001).is_sign_positive());
        assert_eq!(rnd3(0.22487499820191523), 0.225);
    }

    #[test]
    fn test_mat3_identity() {
        let id = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(mat3_mul(&id, [0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(725.0), 5.0);
        assert!(wrap_hue(f64::NAN).is_nan());
    }
}
