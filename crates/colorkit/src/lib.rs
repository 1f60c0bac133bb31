//! colorkit: color parsing, conversion, interpolation and scales
//!
//! A [`Color`] is an sRGB value with alpha. It is built from any supported
//! representation (hex strings, CSS color functions, W3C names, packed
//! integers, channel arrays in a dozen color spaces) and converts on demand
//! to all of them.
//!
//! # Quick Start
//!
//! ```
//! use colorkit::{Color, CssMode, HexMode};
//!
//! let c = Color::new("hotpink").unwrap();
//! assert_eq!(c.hex(HexMode::Auto), "#ff69b4");
//! assert_eq!(c.darken(1.0).hex(HexMode::Auto), "#c93384");
//! assert_eq!(c.css(CssMode::Hsl), "hsl(330deg 100% 70.59%)");
//! ```
//!
//! Channel arrays need an explicit [`Format`] when they are not plain RGB:
//!
//! ```
//! use colorkit::{Color, Format, HexMode};
//!
//! let c = Color::with_format(vec![0.0, 1.0, 0.5], Format::Hsl).unwrap();
//! assert_eq!(c.hex(HexMode::Auto), "#ff0000");
//! ```
//!
//! # Color Spaces
//!
//! | Space | Channels | Notes |
//! |-------|----------|-------|
//! | RGB | 0-255 | clamped, out-of-gamut input is recorded as clipped |
//! | HSL, HSV, HSI, HCG | hue in degrees, rest in `[0, 1]` | hue is NaN for grays |
//! | Lab, LCh, HCL | CIE L\*a\*b\* | white point selectable through [`Illuminant`] |
//! | OKLab, OKLCh | Ottosson 2020 | always D65 |
//! | CMYK | `[0, 1]` | naive, no ICC profile |
//! | temperature | Kelvin | approximation valid from 1000K to 40000K |
//!
//! Lab-family conversions default to D65. The `*_in` variants
//! ([`Color::lab_in`], [`Color::from_lab_in`], ...) take the white point as
//! an argument instead of reading any global setting.
//!
//! # Interpolation
//!
//! [`mix`] blends two colors in one of the [`Mode`]s. Hue spaces take the
//! shorter way around the circle, and a gray endpoint borrows the hue of
//! the other endpoint so that mixing towards gray does not swing through
//! unrelated hues.
//!
//! [`Scale`] maps numbers to colors over a palette, with domains, classes,
//! gamma, padding and lightness correction. [`Bezier`] and [`Cubehelix`]
//! produce curves that turn into scales as well.
//!
//! # Metrics
//!
//! - [`contrast`]: WCAG 2.x contrast ratio
//! - [`contrast_apca`]: APCA lightness contrast (0.0.98G constants)
//! - [`delta_e`]: CIEDE2000
//! - [`distance`]: Euclidean distance in any space
//!
//! [`analyze`] and [`limits`] compute class breaks for data-driven scales.

pub mod analyze;
pub mod average;
pub mod bezier;
pub mod blend;
pub mod brewer;
pub mod color;
pub mod cubehelix;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod io;
pub mod metrics;
pub mod scale;
pub mod space;
mod util;

#[cfg(test)]
mod domain_tests;

pub use analyze::{analyze, limits, Analysis, LimitMode};
pub use average::average;
pub use bezier::Bezier;
pub use blend::{blend, BlendMode};
pub use color::{valid, valid_with_format, ChannelEdit, Color};
pub use cubehelix::Cubehelix;
pub use error::{ColorError, Result};
pub use input::{Format, Input};
pub use interpolate::{mix, mix_inputs, Mode};
pub use io::{CssMode, HexMode};
pub use metrics::{contrast, contrast_apca, delta_e, distance, DeltaEWeights};
pub use scale::Scale;
pub use space::{Illuminant, Space};
