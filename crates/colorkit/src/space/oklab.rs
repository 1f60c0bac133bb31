//! Oklab perceptual color space.
//!
//! Computed through D65 XYZ using the LMS matrices published by Björn
//! Ottosson. OKLab has a fixed D65 reference, so it never takes a white
//! point argument.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::lab;
use super::whitepoint::Illuminant;
use crate::util::mat3_mul;

const XYZ_TO_LMS: [[f64; 3]; 3] = [
    [0.819022437996703, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
];

const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210454268309314, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.42859224204858, 0.450593709617411],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
];

const LMS_TO_XYZ: [[f64; 3]; 3] = [
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.112286803280317, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
];

pub fn xyz_to_oklab(xyz: [f64; 3]) -> [f64; 3] {
    let lms = mat3_mul(&XYZ_TO_LMS, xyz);
    mat3_mul(&LMS_TO_OKLAB, lms.map(f64::cbrt))
}

pub fn oklab_to_xyz(oklab: [f64; 3]) -> [f64; 3] {
    let lms = mat3_mul(&OKLAB_TO_LMS, oklab);
    mat3_mul(&LMS_TO_XYZ, lms.map(|c| c * c * c))
}

/// sRGB (0-255) to `[L, a, b]`.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_oklab(lab::rgb_to_xyz(rgb, Illuminant::D65))
}

/// `[L, a, b]` to sRGB (0-255, unclamped).
pub fn to_rgb(oklab: [f64; 3]) -> [f64; 3] {
    lab::xyz_to_rgb(oklab_to_xyz(oklab), Illuminant::D65)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the palette crate, which derives LMS straight from
    /// linear sRGB instead of going through XYZ.
    const PALETTE_TOLERANCE: f64 = 1e-3;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_red_known_value() {
        let ok = from_rgb([255.0, 0.0, 0.0]);
        assert!(approx_eq(ok[0], 0.6279886791592625, 1e-9), "L = {}", ok[0]);
        assert!(approx_eq(ok[1], 0.22487499820191523, 1e-9), "a = {}", ok[1]);
        assert!(approx_eq(ok[2], 0.12585295391764884, 1e-9), "b = {}", ok[2]);
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
        ];

        for (r, g, b) in test_colors {
            let srgb = [r, g, b].map(|c: f64| lab::compand(c) * 255.0);
            let ours = from_rgb(srgb);

            let linear: LinSrgb<f64> = LinSrgb::new(r, g, b);
            let theirs: PaletteOklab<f64> = linear.into_color();

            assert!(
                approx_eq(ours[0], theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours[0],
                theirs.l
            );
            assert!(
                approx_eq(ours[1], theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours[1],
                theirs.a
            );
            assert!(
                approx_eq(ours[2], theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours[2],
                theirs.b
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            [255.0, 0.0, 0.0],
            [0.0, 255.0, 0.0],
            [0.0, 0.0, 255.0],
            [64.0, 64.0, 64.0],
            [255.0, 128.0, 64.0],
        ];
        for rgb in samples {
            let back = to_rgb(from_rgb(rgb));
            for i in 0..3 {
                assert!(
                    approx_eq(rgb[i], back[i], 1e-4),
                    "round trip failed for {:?}: {:?}",
                    rgb,
                    back
                );
            }
        }
    }

    #[test]
    fn test_white_is_neutral() {
        let white = from_rgb([255.0, 255.0, 255.0]);
        assert!(approx_eq(white[0], 1.0, 1e-4), "L = {}", white[0]);
        assert!(white[1].abs() < 1e-4);
        assert!(white[2].abs() < 1e-4);
    }
}
