//! Dave Green's cubehelix color scheme.
//!
//! A helix through the RGB cube with monotonically increasing perceived
//! brightness. See D. A. Green, "A colour scheme for the display of
//! astronomical intensity images", Bull. Astr. Soc. India (2011) 39, 289.

use crate::color::Color;
use crate::scale::Scale;
use crate::util::TWO_PI;

/// Cubehelix generator. Defaults: start 300, rotations -1.5, hue 1, gamma 1,
/// lightness `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubehelix {
    start: f64,
    rotations: f64,
    hue: [f64; 2],
    gamma: f64,
    lightness: [f64; 2],
}

impl Default for Cubehelix {
    fn default() -> Self {
        Cubehelix {
            start: 300.0,
            rotations: -1.5,
            hue: [1.0, 1.0],
            gamma: 1.0,
            lightness: [0.0, 1.0],
        }
    }
}

impl Cubehelix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting hue angle in degrees.
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn rotations(mut self, rotations: f64) -> Self {
        self.rotations = rotations;
        self
    }

    /// Constant saturation amplitude.
    pub fn hue(mut self, hue: f64) -> Self {
        self.hue = [hue, hue];
        self
    }

    /// Saturation amplitude varying linearly from `from` to `to`.
    pub fn hue_range(mut self, from: f64, to: f64) -> Self {
        self.hue = [from, to];
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn lightness(mut self, from: f64, to: f64) -> Self {
        self.lightness = [from, to];
        self
    }

    /// Color at `fract` in `[0, 1]`.
    pub fn at(&self, fract: f64) -> Color {
        let a = TWO_PI * ((self.start + 120.0) / 360.0 + self.rotations * fract);
        let [l0, l1] = self.lightness;
        let l = (l0 + (l1 - l0) * fract).powf(self.gamma);
        let [h0, h1] = self.hue;
        let h = h0 + fract * (h1 - h0);
        let amp = h * l * (1.0 - l) / 2.0;
        let (sin_a, cos_a) = a.sin_cos();
        let r = l + amp * (-0.14861 * cos_a + 1.78277 * sin_a);
        let g = l + amp * (-0.29227 * cos_a - 0.90649 * sin_a);
        let b = l + amp * (1.97294 * cos_a);
        Color::from_rgb([r * 255.0, g * 255.0, b * 255.0])
    }

    pub fn scale(self) -> Scale {
        Scale::from_cubehelix(self)
    }
}
