use colorkit::{brewer, ColorError, CssMode, Illuminant, Mode};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SwatchError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SWATCH_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SwatchConfig {
    /// Interpolation mode for mixing and scales
    pub mode: Mode,

    /// CSS notation used in human-readable output
    pub css_mode: CssMode,

    /// White point for Lab and LCh output
    pub white_point: Illuminant,

    /// Named palettes, usable wherever a ColorBrewer name is accepted
    pub palettes: HashMap<String, Vec<String>>,

    /// Minimum WCAG contrast ratio reported as passing
    pub contrast_threshold: f64,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Lrgb,
            css_mode: CssMode::Rgb,
            white_point: Illuminant::D65,
            palettes: HashMap::new(),
            contrast_threshold: 4.5,
        }
    }
}

impl SwatchConfig {
    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self, SwatchError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path`, or from `$SWATCH_CONFIG` when no path is given.
    /// Any failure falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) => PathBuf::from(p),
                None => return Self::default(),
            },
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Colors of a named palette. User palettes shadow ColorBrewer ones;
    /// user names match exactly, ColorBrewer names ignore case.
    pub fn palette(&self, name: &str) -> Result<Vec<String>, ColorError> {
        if let Some(colors) = self.palettes.get(name) {
            return Ok(colors.clone());
        }
        brewer::palette(name)
            .map(|hexes| hexes.iter().map(|h| h.to_string()).collect())
            .ok_or_else(|| ColorError::UnknownPalette(name.to_string()))
    }
}
