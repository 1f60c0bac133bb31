//! Weighted average of several colors.

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::interpolate::Mode;
use crate::space::{Illuminant, Space};
use crate::util::{DEG2RAD, RAD2DEG};

fn mode_space(mode: Mode) -> Result<Space> {
    Ok(match mode {
        Mode::Rgb => Space::Rgb,
        Mode::Lab => Space::Lab,
        Mode::Lch => Space::Lch,
        Mode::Hcl => Space::Hcl,
        Mode::Hsl => Space::Hsl,
        Mode::Hsv => Space::Hsv,
        Mode::Hsi => Space::Hsi,
        Mode::Hcg => Space::Hcg,
        Mode::Oklab => Space::Oklab,
        Mode::Oklch => Space::Oklch,
        Mode::Lrgb | Mode::Num => return Err(ColorError::UnknownMode(mode.name().to_string())),
    })
}

/// Average `colors` in `mode`, optionally weighted.
///
/// Hue channels use the circular mean. Channels that are undefined (NaN
/// hue of a gray) are left out of that channel's average. In `lrgb` mode
/// the squared RGB channels are averaged.
///
/// ```
/// use colorkit::{average, Color, HexMode, Mode};
///
/// let colors = [Color::new("red").unwrap(), Color::new("yellow").unwrap()];
/// let avg = average(&colors, Mode::Hsl, None).unwrap();
/// assert_eq!(avg.hex(HexMode::Auto), "#ff8000");
/// ```
pub fn average(colors: &[Color], mode: Mode, weights: Option<&[f64]>) -> Result<Color> {
    if colors.is_empty() {
        return Err(ColorError::NotEnoughColors { needed: 1, got: 0 });
    }
    let n = colors.len() as f64;
    let weights: Vec<f64> = match weights {
        Some(w) if w.len() != colors.len() => {
            return Err(ColorError::WeightCount {
                expected: colors.len(),
                got: w.len(),
            })
        }
        Some(w) => {
            let k = n / w.iter().sum::<f64>();
            w.iter().map(|x| x * k).collect()
        }
        None => vec![1.0; colors.len()],
    };

    if mode == Mode::Lrgb {
        return Ok(average_lrgb(colors, &weights));
    }

    let space = mode_space(mode)?;
    let hue = space.hue_index();
    let dims = space.channel_count();
    let mut sums = vec![0.0; dims];
    let mut counts = vec![0.0; dims];
    let (mut dx, mut dy) = (0.0, 0.0);
    let mut alpha = 0.0;

    for (color, &w) in colors.iter().zip(&weights) {
        alpha += color.alpha() * w;
        for (i, v) in color.channels(space).into_iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            counts[i] += w;
            if Some(i) == hue {
                let (sin, cos) = (v * DEG2RAD).sin_cos();
                dx += cos * w;
                dy += sin * w;
            } else {
                sums[i] += v * w;
            }
        }
    }

    let channels: Vec<f64> = (0..dims)
        .map(|i| {
            if Some(i) == hue {
                circular_mean(dx, dy, counts[i])
            } else {
                linear_mean(sums[i], counts[i])
            }
        })
        .collect();

    let alpha = alpha / n;
    let alpha = if alpha > 0.99999 { 1.0 } else { alpha };
    Ok(Color::from_space(space, &channels, Illuminant::D65)?.with_alpha(alpha))
}

/// Mean hue in degrees from summed unit vectors; NaN when no hue was defined.
fn circular_mean(dx: f64, dy: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        return f64::NAN;
    }
    ((dy / weight).atan2(dx / weight) * RAD2DEG).rem_euclid(360.0)
}

fn linear_mean(sum: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        sum / weight
    }
}

fn average_lrgb(colors: &[Color], weights: &[f64]) -> Color {
    let n = colors.len() as f64;
    let mut acc = [0.0; 4];
    for (color, w) in colors.iter().zip(weights) {
        let f = w / n;
        let [r, g, b, a] = color.rgb_raw();
        acc[0] += r * r * f;
        acc[1] += g * g * f;
        acc[2] += b * b * f;
        acc[3] += a * f;
    }
    let alpha = if acc[3] > 0.9999999 { 1.0 } else { acc[3] };
    Color::from_rgba([acc[0].sqrt(), acc[1].sqrt(), acc[2].sqrt(), alpha])
}
