//! CIE L*a*b* with Bradford chromatic adaptation.
//!
//! sRGB values are always defined relative to D65. When Lab is requested
//! against another reference white, XYZ is adapted in the Bradford cone
//! response domain before the Lab transfer function is applied:
//!
//! ```text
//! sRGB (0-255) -> linear -> XYZ(D65) -> Bradford -> XYZ(white) -> Lab
//! ```

use super::whitepoint::Illuminant;
use crate::util::mat3_mul;

/// Lab lightness step used by darken/brighten and saturate/desaturate.
pub const KN: f64 = 18.0;

const K_E: f64 = 216.0 / 24389.0;
const K_KE: f64 = 8.0;
const K_K: f64 = 24389.0 / 27.0;

/// sRGB reference white (D65).
const REF_WHITE_RGB: [f64; 3] = [0.95047, 1.0, 1.08883];

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564390896922, 0.357576077643909, 0.18043748326639894],
    [0.21267285140562253, 0.715152155287818, 0.07217499330655958],
    [0.0193338955823293, 0.11919202588130297, 0.9503040785363679],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404541621141045, -1.5371385127977166, -0.498531409556016],
    [-0.9692660305051868, 1.8760108454466942, 0.041556017530349834],
    [0.055643430959114726, -0.2040259135167538, 1.0572251882231791],
];

const BRADFORD: [[f64; 3]; 3] = [
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
];

const BRADFORD_INV: [[f64; 3]; 3] = [
    [0.9869929054667123, -0.14705425642099013, 0.15996265166373125],
    [0.43230526972339456, 0.5183602715367776, 0.0492912282128556],
    [-0.008528664575177328, 0.04004282165408487, 0.9684866957875502],
];

/// sRGB companded channel (0-1) to linear light. Sign is preserved so
/// out-of-gamut intermediates survive the round trip.
#[inline]
pub(crate) fn gamma_expand(c: f64) -> f64 {
    let a = c.abs();
    let linear = if a <= 0.04045 {
        a / 12.92
    } else {
        ((a + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// Linear light to sRGB companded channel (0-1), sign preserving.
#[inline]
pub(crate) fn compand(linear: f64) -> f64 {
    let a = linear.abs();
    let c = if a <= 0.0031308 {
        a * 12.92
    } else {
        1.055 * a.powf(1.0 / 2.4) - 0.055
    };
    c.copysign(linear)
}

/// Bradford scale factors moving cone responses from `from` to `to`.
fn adaptation(from: [f64; 3], to: [f64; 3]) -> [f64; 3] {
    let src = mat3_mul(&BRADFORD, from);
    let dst = mat3_mul(&BRADFORD, to);
    [dst[0] / src[0], dst[1] / src[1], dst[2] / src[2]]
}

fn adapt(xyz: [f64; 3], from: [f64; 3], to: [f64; 3]) -> [f64; 3] {
    let cone = mat3_mul(&BRADFORD, xyz);
    let k = adaptation(from, to);
    mat3_mul(&BRADFORD_INV, [cone[0] * k[0], cone[1] * k[1], cone[2] * k[2]])
}

/// sRGB (0-255) to XYZ relative to `white`.
pub fn rgb_to_xyz(rgb: [f64; 3], white: Illuminant) -> [f64; 3] {
    let lin = rgb.map(|c| gamma_expand(c / 255.0));
    let xyz = mat3_mul(&RGB_TO_XYZ, lin);
    adapt(xyz, REF_WHITE_RGB, white.xyz())
}

/// XYZ relative to `white` back to sRGB (0-255, unclamped).
pub fn xyz_to_rgb(xyz: [f64; 3], white: Illuminant) -> [f64; 3] {
    let xyz = adapt(xyz, white.xyz(), REF_WHITE_RGB);
    mat3_mul(&XYZ_TO_RGB, xyz).map(|c| compand(c) * 255.0)
}

pub fn xyz_to_lab(xyz: [f64; 3], white: Illuminant) -> [f64; 3] {
    let w = white.xyz();
    let f = |t: f64| {
        if t > K_E {
            t.cbrt()
        } else {
            (K_K * t + 16.0) / 116.0
        }
    };
    let fx = f(xyz[0] / w[0]);
    let fy = f(xyz[1] / w[1]);
    let fz = f(xyz[2] / w[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub fn lab_to_xyz(lab: [f64; 3], white: Illuminant) -> [f64; 3] {
    let [l, a, b] = lab;
    let w = white.xyz();
    let fy = (l + 16.0) / 116.0;
    let fx = 0.002 * a + fy;
    let fz = fy - 0.005 * b;
    let fx3 = fx * fx * fx;
    let fz3 = fz * fz * fz;
    let xr = if fx3 > K_E { fx3 } else { (116.0 * fx - 16.0) / K_K };
    let yr = if l > K_KE { fy * fy * fy } else { l / K_K };
    let zr = if fz3 > K_E { fz3 } else { (116.0 * fz - 16.0) / K_K };
    [xr * w[0], yr * w[1], zr * w[2]]
}

/// sRGB (0-255) to Lab against `white`.
pub fn from_rgb(rgb: [f64; 3], white: Illuminant) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb, white), white)
}

/// Lab against `white` to sRGB (0-255, unclamped).
pub fn to_rgb(lab: [f64; 3], white: Illuminant) -> [f64; 3] {
    xyz_to_rgb(lab_to_xyz(lab, white), white)
}
