//! Error types for color decoding, channel access and derived computations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Autodetection found no format able to read the input.
    #[error("unknown format: {input}")]
    UnknownFormat { input: String },

    /// Unknown format name given explicitly.
    #[error("unknown color format name: {0}")]
    UnknownFormatName(String),

    /// The input was handed to a format that could not parse it.
    #[error("cannot decode {input} as {format}: {reason}")]
    Decode {
        format: &'static str,
        input: String,
        reason: String,
    },

    #[error("unknown channel {channel} in {space}")]
    UnknownChannel { channel: String, space: String },

    #[error("unknown color space: {0}")]
    UnknownSpace(String),

    #[error("unknown interpolation mode: {0}")]
    UnknownMode(String),

    #[error("invalid channel value: {0}")]
    InvalidChannelValue(String),

    #[error("unknown illuminant: {0}")]
    UnknownIlluminant(String),

    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    #[error("unknown limits mode: {0}")]
    UnknownLimitMode(String),

    /// Logarithmic class breaks need strictly positive values.
    #[error("logarithmic scales require positive values (min was {min})")]
    LogarithmicDomain { min: f64 },

    #[error("at least {needed} colors are required, got {got}")]
    NotEnoughColors { needed: usize, got: usize },

    #[error("expected {expected} weights, got {got}")]
    WeightCount { expected: usize, got: usize },
}

impl ColorError {
    pub(crate) fn decode(format: &'static str, input: impl ToString, reason: impl ToString) -> Self {
        ColorError::Decode {
            format,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
