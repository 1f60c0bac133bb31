//! Bezier curves through Lab space.

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::scale::Scale;
use crate::space::{lab, Illuminant};

/// A Lab bezier curve whose control points are the given colors.
///
/// Two colors give a straight line, three a quadratic curve, four a cubic
/// one, and more use the general Bernstein form. The curve passes through
/// the first and last colors only.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    labs: Vec<[f64; 3]>,
    binomials: Vec<f64>,
}

/// Row `n` of Pascal's triangle.
fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = vec![1.0];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(1.0);
        next.extend(row.windows(2).map(|w| w[0] + w[1]));
        next.push(1.0);
        row = next;
    }
    row
}

impl Bezier {
    pub fn new(colors: &[Color]) -> Result<Bezier> {
        if colors.len() < 2 {
            return Err(ColorError::NotEnoughColors {
                needed: 2,
                got: colors.len(),
            });
        }
        Ok(Bezier {
            labs: colors.iter().map(Color::lab).collect(),
            binomials: binomial_row(colors.len() - 1),
        })
    }

    /// Color at `t` in `[0, 1]`.
    pub fn at(&self, t: f64) -> Color {
        let u = 1.0 - t;
        let p = &self.labs;
        let point = |i: usize| match p.len() {
            2 => p[0][i] + t * (p[1][i] - p[0][i]),
            3 => u * u * p[0][i] + 2.0 * u * t * p[1][i] + t * t * p[2][i],
            4 => {
                u * u * u * p[0][i]
                    + 3.0 * u * u * t * p[1][i]
                    + 3.0 * u * t * t * p[2][i]
                    + t * t * t * p[3][i]
            }
            len => {
                let n = len - 1;
                p.iter()
                    .zip(&self.binomials)
                    .enumerate()
                    .map(|(j, (lab, b))| b * u.powi((n - j) as i32) * t.powi(j as i32) * lab[i])
                    .sum()
            }
        };
        Color::from_rgb(lab::to_rgb([point(0), point(1), point(2)], Illuminant::D65))
    }

    pub fn scale(self) -> Scale {
        Scale::from_bezier(self)
    }
}
