//! Reference white points for the Lab family.
//!
//! Tristimulus values follow ASTM E308-01 with `Y` normalized to 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// CIE standard illuminant used as the Lab reference white.
///
/// Every Lab/LCh conversion takes one of these explicitly. [`Illuminant::D65`]
/// is the default and matches the sRGB reference white, so no chromatic
/// adaptation happens for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    #[default]
    D65,
    E,
    F2,
    F7,
    F11,
    /// ICC profile connection space white (same as D50).
    Icc,
}

impl Illuminant {
    pub const ALL: [Illuminant; 11] = [
        Illuminant::A,
        Illuminant::B,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::E,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
        Illuminant::Icc,
    ];

    /// XYZ tristimulus values of the white point, `Y = 1`.
    pub fn xyz(self) -> [f64; 3] {
        let (x, z) = match self {
            Illuminant::A => (1.0985, 0.35585),
            Illuminant::B => (0.99072, 0.85223),
            Illuminant::C => (0.98074, 1.18232),
            Illuminant::D50 | Illuminant::Icc => (0.96422, 0.82521),
            Illuminant::D55 => (0.95682, 0.92149),
            Illuminant::D65 => (0.95047, 1.08883),
            Illuminant::E => (1.0, 1.0),
            Illuminant::F2 => (0.99186, 0.67393),
            Illuminant::F7 => (0.95041, 1.08747),
            Illuminant::F11 => (1.00962, 0.6435),
        };
        [x, 1.0, z]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Illuminant::A => "a",
            Illuminant::B => "b",
            Illuminant::C => "c",
            Illuminant::D50 => "d50",
            Illuminant::D55 => "d55",
            Illuminant::D65 => "d65",
            Illuminant::E => "e",
            Illuminant::F2 => "f2",
            Illuminant::F7 => "f7",
            Illuminant::F11 => "f11",
            Illuminant::Icc => "icc",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Illuminant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Illuminant::ALL
            .into_iter()
            .find(|ill| ill.as_str() == lower)
            .ok_or_else(|| ColorError::UnknownIlluminant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("D50".parse::<Illuminant>().unwrap(), Illuminant::D50);
        assert_eq!("f11".parse::<Illuminant>().unwrap(), Illuminant::F11);
        assert!(matches!(
            "d75".parse::<Illuminant>(),
            Err(ColorError::UnknownIlluminant(_))
        ));
    }

    #[test]
    fn test_icc_matches_d50() {
        assert_eq!(Illuminant::Icc.xyz(), Illuminant::D50.xyz());
    }

    #[test]
    fn test_default_is_d65() {
        assert_eq!(Illuminant::default(), Illuminant::D65);
        assert_eq!(Illuminant::default().xyz(), [0.95047, 1.0, 1.08883]);
    }
}
