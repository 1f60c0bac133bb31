//! Tests for loading swatch.yaml and how its settings reach the commands.

mod common;

use colorkit::{CssMode, Illuminant, Mode};
use common::Fixture;
use pretty_assertions::assert_eq;
use swatch::commands::{self, ScaleOptions};
use swatch::{SwatchConfig, SwatchError};

#[test]
fn test_load_full_config() {
    let fixture = Fixture::new();
    let config = fixture.config(
        r##"
mode: lab
css_mode: oklch
white_point: d50
contrast_threshold: 7
palettes:
  brand: ["#0b3d91", "#fc3d21"]
"##,
    );

    assert_eq!(config.mode, Mode::Lab);
    assert_eq!(config.css_mode, CssMode::Oklch);
    assert_eq!(config.white_point, Illuminant::D50);
    assert_eq!(config.contrast_threshold, 7.0);
    assert_eq!(config.palettes["brand"], vec!["#0b3d91", "#fc3d21"]);
}

#[test]
fn test_invalid_yaml_is_an_error_for_explicit_load() {
    let fixture = Fixture::new();
    let path = fixture.file("broken.yaml", "mode: [unterminated");

    match SwatchConfig::load(&path) {
        Err(SwatchError::Config(_)) => {}
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let fixture = Fixture::new();
    let path = fixture.file("broken.yaml", "contrast_threshold: lots");

    let config = SwatchConfig::load_or_default(Some(&path));
    assert_eq!(config, SwatchConfig::default());
}

#[test]
fn test_user_palette_drives_scale() {
    let fixture = Fixture::new();
    let config = fixture.config(
        r##"
palettes:
  brand: ["#0b3d91", "#fc3d21"]
"##,
    );
    let options = ScaleOptions {
        palette: Some("brand".to_string()),
        count: 3,
        ..Default::default()
    };

    let report = commands::scale_colors(&options, &config).unwrap();
    // Default config mode is lrgb.
    assert_eq!(report.colors, vec!["#0b3d91", "#b23d69", "#fc3d21"]);
}

#[test]
fn test_threshold_changes_verdict() {
    let fixture = Fixture::new();
    let strict = fixture.config("contrast_threshold: 7\n");
    let default = SwatchConfig::default();

    // 14.9:1 passes both; #777 on white (4.48:1) fails both.
    assert!(commands::contrast_check("yellow", "navy", &strict).unwrap().passes);
    assert!(!commands::contrast_check("#777", "white", &default).unwrap().passes);

    // 5.74:1 passes AA (4.5) but not AAA (7).
    assert!(commands::contrast_check("#666", "white", &default).unwrap().passes);
    assert!(!commands::contrast_check("#666", "white", &strict).unwrap().passes);
}

#[test]
fn test_css_mode_applies_to_output() {
    let fixture = Fixture::new();
    let config = fixture.config("css_mode: hsl\n");

    let report = commands::mix_colors("red", "blue", 0.0, None, &config).unwrap();
    assert_eq!(report.css, "hsl(0deg 100% 50%)");
}
