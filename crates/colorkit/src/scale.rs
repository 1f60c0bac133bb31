//! Color scales: numeric domain in, color out.
//!
//! A [`Scale`] resolves a value in three steps. The value is first turned
//! into a position `t` in `[0, 1]`, either linearly over the domain or
//! stepped by class breaks. `t` is then remapped (uneven domain breaks,
//! lightness correction, gamma, padding) and finally looked up among the
//! color stops, interpolating between the two stops that bracket it.
//!
//! Builder methods consume and return the scale, so configuration chains:
//!
//! ```
//! use colorkit::{Color, HexMode, Mode, Scale};
//!
//! let scale = Scale::from_inputs(["yellow", "008ae5"])
//!     .unwrap()
//!     .domain(&[0.0, 100.0])
//!     .mode(Mode::Lch);
//! assert_eq!(scale.get(0.0).hex(HexMode::Auto), "#ffff00");
//! assert_eq!(scale.colors(3).len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::analyze::{analyze, LimitMode};
use crate::bezier::Bezier;
use crate::brewer;
use crate::color::Color;
use crate::cubehelix::Cubehelix;
use crate::error::{ColorError, Result};
use crate::input::Input;
use crate::interpolate::{mix, Mode};
use crate::space::hsl;
use crate::util::limit;

const CACHE_LEVELS: f64 = 10_000.0;
const LIGHTNESS_MAX_ITER: usize = 20;
const LIGHTNESS_TOLERANCE: f64 = 0.01;

/// Where a scale takes its colors from once `t` is known.
#[derive(Debug, Clone)]
enum Source {
    /// At least two stops, with one position per stop.
    Stops {
        colors: Vec<Color>,
        positions: Vec<f64>,
    },
    Bezier(Bezier),
    Cubehelix(Cubehelix),
}

impl Source {
    fn stops(colors: Vec<Color>) -> Source {
        let colors = match colors.len() {
            0 => vec![Color::from_rgb([255.0; 3]), Color::from_rgb([0.0; 3])],
            1 => vec![colors[0], colors[0]],
            _ => colors,
        };
        let positions = even_positions(colors.len());
        Source::Stops { colors, positions }
    }
}

fn even_positions(k: usize) -> Vec<f64> {
    (0..k).map(|i| i as f64 / (k - 1) as f64).collect()
}

#[derive(Debug, Clone)]
pub struct Scale {
    source: Source,
    mode: Mode,
    nodata: Color,
    domain: [f64; 2],
    /// Normalized domain breaks when they are not evenly spaced.
    domain_breaks: Option<Vec<f64>>,
    padding: [f64; 2],
    gamma: f64,
    classes: Option<Vec<f64>>,
    correct_lightness: bool,
    use_cache: bool,
    cache: RefCell<HashMap<i64, Color>>,
}

/// White to black.
impl Default for Scale {
    fn default() -> Self {
        Scale::new(Vec::new())
    }
}

impl Scale {
    /// A scale over `colors`, evenly spaced on `[0, 1]`. No colors gives
    /// white to black, a single color gives a flat scale.
    pub fn new(colors: Vec<Color>) -> Scale {
        Scale::with_source(Source::stops(colors))
    }

    pub fn from_inputs<I>(inputs: impl IntoIterator<Item = I>) -> Result<Scale>
    where
        I: Into<Input>,
    {
        let colors = inputs
            .into_iter()
            .map(Color::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Scale::new(colors))
    }

    /// A scale over a ColorBrewer palette, looked up case-insensitively.
    pub fn brewer(name: &str) -> Result<Scale> {
        let hexes = brewer::palette(name).ok_or_else(|| ColorError::UnknownPalette(name.to_string()))?;
        Scale::from_inputs(hexes.iter().copied())
    }

    pub(crate) fn from_bezier(bezier: Bezier) -> Scale {
        Scale::with_source(Source::Bezier(bezier))
    }

    pub(crate) fn from_cubehelix(helix: Cubehelix) -> Scale {
        Scale::with_source(Source::Cubehelix(helix))
    }

    fn with_source(source: Source) -> Scale {
        Scale {
            source,
            mode: Mode::Rgb,
            nodata: Color::from_rgb([204.0; 3]),
            domain: [0.0, 1.0],
            domain_breaks: None,
            padding: [0.0, 0.0],
            gamma: 1.0,
            classes: None,
            correct_lightness: false,
            use_cache: true,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Light cyan to dark blue.
    pub fn cool() -> Scale {
        Scale::new(vec![
            Color::from_rgb(hsl::to_rgb([180.0, 1.0, 0.9])),
            Color::from_rgb(hsl::to_rgb([250.0, 0.7, 0.4])),
        ])
    }

    /// Black through red and yellow to white.
    pub fn hot() -> Scale {
        let stops = [[0.0; 3], [255.0, 0.0, 0.0], [255.0, 255.0, 0.0], [255.0; 3]];
        Scale::new(stops.into_iter().map(Color::from_rgb).collect())
            .domain(&[0.0, 0.25, 0.75, 1.0])
    }

    fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Set the input domain. With as many values as there are stops, the
    /// values become the stop positions. More than two values that are not
    /// evenly spaced stretch the scale piecewise so that the stops stay
    /// evenly spread over the breaks. An empty slice leaves the scale
    /// untouched.
    pub fn domain(mut self, domain: &[f64]) -> Self {
        let (Some(&min), Some(&max)) = (domain.first(), domain.last()) else {
            return self;
        };
        self.domain_breaks = None;
        let span = max - min;
        let breaks: Vec<f64> = domain.iter().map(|d| (d - min) / span).collect();
        match &mut self.source {
            Source::Stops { colors, positions } if domain.len() == colors.len() && min != max => {
                *positions = breaks;
            }
            source => {
                if let Source::Stops { colors, positions } = source {
                    *positions = even_positions(colors.len());
                }
                let last = (breaks.len() - 1) as f64;
                let even = breaks.iter().enumerate().all(|(i, b)| i as f64 / last == *b);
                if breaks.len() > 2 && !even {
                    self.domain_breaks = Some(breaks);
                }
            }
        }
        self.domain = [min, max];
        self.invalidate();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.invalidate();
        self
    }

    /// Replace the color stops, spacing them evenly. The domain is kept.
    pub fn range(mut self, colors: Vec<Color>) -> Self {
        self.source = Source::stops(colors);
        self.invalidate();
        self
    }

    /// Trim both ends of the color range by `p`, a fraction of `[0, 1]`.
    /// Negative padding extends past the end stops, which then clamp.
    pub fn padding(self, p: f64) -> Self {
        self.padding_pair(p, p)
    }

    pub fn padding_pair(mut self, low: f64, high: f64) -> Self {
        self.padding = [low, high];
        self.invalidate();
        self
    }

    /// Raise `t` to this power. Values above 1 spread the high end.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self.invalidate();
        self
    }

    /// Explicit class breaks. The domain becomes `[first, last]`.
    pub fn classes(mut self, breaks: Vec<f64>) -> Self {
        if let (Some(&first), Some(&last)) = (breaks.first(), breaks.last()) {
            self.domain = [first, last];
        }
        self.classes = Some(breaks);
        self.invalidate();
        self
    }

    /// `n` equal classes over the current domain. Zero collapses into a
    /// single class spanning the domain.
    pub fn class_count(mut self, n: usize) -> Self {
        let a = analyze(&self.domain);
        let breaks = if n == 0 {
            vec![a.min, a.max]
        } else {
            // Equal limits cannot fail.
            a.limits(LimitMode::Equal, n).unwrap_or_else(|_| vec![a.min, a.max])
        };
        self.classes = Some(breaks);
        self.invalidate();
        self
    }

    /// Remap positions so Lab lightness changes linearly along the scale.
    pub fn correct_lightness(mut self, on: bool) -> Self {
        self.correct_lightness = on;
        self.invalidate();
        self
    }

    pub fn cache(mut self, on: bool) -> Self {
        self.use_cache = on;
        self.invalidate();
        self
    }

    /// The color returned for NaN. Defaults to `#cccccc`.
    pub fn nodata(mut self, color: Color) -> Self {
        self.nodata = color;
        self.invalidate();
        self
    }

    pub fn domain_bounds(&self) -> [f64; 2] {
        self.domain
    }

    pub fn class_breaks(&self) -> Option<&[f64]> {
        self.classes.as_deref()
    }

    /// The color at `value`.
    pub fn get(&self, value: f64) -> Color {
        self.resolve(value, false)
    }

    /// `n` colors sampled evenly across the domain.
    ///
    /// `n == 1` samples the middle of the domain. `n == 0` samples the
    /// midpoint of every class when classes are set, otherwise the two ends
    /// of the domain.
    pub fn colors(&self, n: usize) -> Vec<Color> {
        let [dm, dmax] = self.domain;
        let dd = dmax - dm;
        match n {
            0 => match &self.classes {
                Some(c) if c.len() > 2 => c.windows(2).map(|w| self.get((w[0] + w[1]) * 0.5)).collect(),
                _ => vec![self.get(dm), self.get(dmax)],
            },
            1 => vec![self.get(dm + dd * 0.5)],
            _ => (0..n)
                .map(|i| self.get(dm + i as f64 / (n - 1) as f64 * dd))
                .collect(),
        }
    }

    fn class_index(classes: &[f64], value: f64) -> usize {
        let n = classes.len() - 1;
        let mut i = 0;
        while i < n && value >= classes[i] {
            i += 1;
        }
        i.saturating_sub(1)
    }

    fn position(&self, value: f64) -> f64 {
        let [min, max] = self.domain;
        match &self.classes {
            Some(c) if c.len() > 2 => Self::class_index(c, value) as f64 / (c.len() - 2) as f64,
            _ if max != min => (value - min) / (max - min),
            _ => 1.0,
        }
    }

    fn map_domain(&self, t: f64) -> f64 {
        let Some(breaks) = &self.domain_breaks else {
            return t;
        };
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        let last = breaks.len() - 1;
        let mut i = 0;
        while i + 1 < last && t >= breaks[i + 1] {
            i += 1;
        }
        let f = (t - breaks[i]) / (breaks[i + 1] - breaks[i]);
        let out0 = i as f64 / last as f64;
        let out1 = (i + 1) as f64 / last as f64;
        out0 + f * (out1 - out0)
    }

    /// Bisect towards the position whose lightness matches the straight
    /// line between the lightness of both ends.
    fn map_lightness(&self, mut t: f64) -> f64 {
        let lightness = |t: f64| self.resolve(t, true).lab()[0];
        let l0 = lightness(0.0);
        let l1 = lightness(1.0);
        let descending = l0 > l1;
        let ideal = l0 + (l1 - l0) * t;
        let mut diff = lightness(t) - ideal;
        let (mut t0, mut t1) = (0.0, 1.0);
        let mut iterations = 0;
        while diff.abs() > LIGHTNESS_TOLERANCE && iterations < LIGHTNESS_MAX_ITER {
            iterations += 1;
            if descending {
                diff = -diff;
            }
            if diff < 0.0 {
                t0 = t;
                t += (t1 - t) * 0.5;
            } else {
                t1 = t;
                t += (t0 - t) * 0.5;
            }
            diff = lightness(t) - ideal;
        }
        if diff.abs() > LIGHTNESS_TOLERANCE {
            tracing::debug!(t, diff, "lightness correction hit iteration cap");
        }
        t
    }

    fn resolve(&self, value: f64, bypass: bool) -> Color {
        if value.is_nan() {
            return self.nodata;
        }
        let mut t = if bypass { value } else { self.position(value) };
        t = self.map_domain(t);
        if !bypass && self.correct_lightness {
            t = self.map_lightness(t);
        }
        if self.gamma != 1.0 {
            t = t.powf(self.gamma);
        }
        t = self.padding[0] + t * (1.0 - self.padding[0] - self.padding[1]);
        t = limit(t, 0.0, 1.0);

        let key = (t * CACHE_LEVELS).floor() as i64;
        if self.use_cache {
            if let Some(color) = self.cache.borrow().get(&key) {
                return *color;
            }
        }
        let color = self.sample(t);
        if self.use_cache {
            self.cache.borrow_mut().insert(key, color);
        }
        color
    }

    fn sample(&self, t: f64) -> Color {
        match &self.source {
            Source::Stops { colors, positions } => {
                let last = positions.len() - 1;
                for (i, &p) in positions.iter().enumerate() {
                    if t <= p || i == last {
                        return colors[i];
                    }
                    let next = positions[i + 1];
                    if t > p && t < next {
                        return mix(&colors[i], &colors[i + 1], (t - p) / (next - p), self.mode);
                    }
                }
                colors[last]
            }
            Source::Bezier(b) => b.at(t),
            Source::Cubehelix(c) => c.at(t),
        }
    }
}
