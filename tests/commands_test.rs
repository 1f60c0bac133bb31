//! End-to-end tests for the command layer, using default configuration.

mod common;

use colorkit::{ColorError, DeltaEWeights, Format, LimitMode, Mode, Space};
use common::{datasets, Fixture};
use pretty_assertions::assert_eq;
use swatch::commands::{self, AdjustOptions, ScaleOptions};
use swatch::{SwatchConfig, SwatchError};

fn config() -> SwatchConfig {
    SwatchConfig::default()
}

// ----------------------------------------------------------------------------
// convert
// ----------------------------------------------------------------------------

#[test]
fn test_convert_named_color() {
    let report = commands::convert("teal", None, &config()).unwrap();

    assert_eq!(report.hex, "#008080");
    assert_eq!(report.name, "teal");
    assert_eq!(report.rgb, [0.0, 128.0, 128.0]);
    assert_eq!(report.num, 0x008080);
    assert_eq!(report.lab, [48.2541, -28.8463, -8.4769]);
    assert!(!report.clipped);
}

#[test]
fn test_convert_channels_with_format() {
    let report = commands::convert("0, 1, 0.5", Some(Format::Hsl), &config()).unwrap();
    assert_eq!(report.hex, "#ff0000");

    let report = commands::convert("16711680", Some(Format::Num), &config()).unwrap();
    assert_eq!(report.hex, "#ff0000");
}

#[test]
fn test_convert_reports_clipping() {
    let report = commands::convert("300, 0, 0", None, &config()).unwrap();
    assert_eq!(report.hex, "#ff0000");
    assert!(report.clipped);
}

#[test]
fn test_convert_gray_has_no_hue_in_json() {
    let report = commands::convert("#777", None, &config()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hsl"][0], serde_json::Value::Null);
    assert_eq!(json["css"], "rgb(119 119 119)");
}

#[test]
fn test_convert_unknown_input() {
    match commands::convert("not-a-color", None, &config()) {
        Err(SwatchError::Color(ColorError::UnknownFormat { .. })) => {}
        other => panic!("Expected UnknownFormat, got {other:?}"),
    }
}

// ----------------------------------------------------------------------------
// contrast / mix / adjust
// ----------------------------------------------------------------------------

#[test]
fn test_contrast_black_on_white() {
    let report = commands::contrast_check("black", "white", &config()).unwrap();

    assert_eq!(report.ratio, 21.0);
    assert!(report.passes);
    assert_eq!(report.threshold, 4.5);
    assert!(report.apca > 100.0);
}

#[test]
fn test_mix_uses_config_mode_by_default() {
    let report = commands::mix_colors("red", "blue", 0.5, None, &config()).unwrap();
    assert_eq!(report.mode, Mode::Lrgb);
    assert_eq!(report.hex, "#b400b4");

    let report = commands::mix_colors("red", "blue", 0.5, Some(Mode::Lab), &config()).unwrap();
    assert_eq!(report.hex, "#ca0088");
}

#[test]
fn test_adjust_pipeline() {
    let options = AdjustOptions {
        darken: Some(1.0),
        ..Default::default()
    };
    let report = commands::adjust("hotpink", &options, &config()).unwrap();
    assert_eq!(report.hex, "#c93384");
    assert_eq!(report.steps, vec!["darken 1"]);

    let options = AdjustOptions {
        set: vec!["hsl.h=+120".to_string()],
        alpha: Some(0.5),
        ..Default::default()
    };
    let report = commands::adjust("red", &options, &config()).unwrap();
    assert_eq!(report.hex, "#00ff0080");
}

#[test]
fn test_adjust_channel_scale() {
    let options = AdjustOptions {
        set: vec!["lab.l=*0.5".to_string()],
        ..Default::default()
    };
    let report = commands::adjust("hotpink", &options, &config()).unwrap();
    assert_eq!(report.hex, "#9d0060");
}

#[test]
fn test_adjust_luminance_in_config_mode() {
    let options = AdjustOptions {
        luminance: Some(0.5),
        ..Default::default()
    };
    let report = commands::adjust("hotpink", &options, &config()).unwrap();
    assert_eq!(report.hex, "#ff9eca");
}

#[test]
fn test_adjust_rejects_malformed_assignment() {
    let options = AdjustOptions {
        set: vec!["lab.l".to_string()],
        ..Default::default()
    };
    match commands::adjust("red", &options, &config()) {
        Err(SwatchError::Assignment(a)) => assert_eq!(a, "lab.l"),
        other => panic!("Expected Assignment error, got {other:?}"),
    }

    let options = AdjustOptions {
        set: vec!["lab.q=3".to_string()],
        ..Default::default()
    };
    assert!(matches!(
        commands::adjust("red", &options, &config()),
        Err(SwatchError::Color(ColorError::UnknownChannel { .. }))
    ));
}

// ----------------------------------------------------------------------------
// scale
// ----------------------------------------------------------------------------

#[test]
fn test_scale_brewer_palette() {
    let options = ScaleOptions {
        palette: Some("RdYlBu".to_string()),
        count: 3,
        ..Default::default()
    };
    let report = commands::scale_colors(&options, &config()).unwrap();
    assert_eq!(report.colors, vec!["#a50026", "#ffffbf", "#313695"]);
    assert_eq!(report.domain, [0.0, 1.0]);
}

#[test]
fn test_scale_bezier() {
    let options = ScaleOptions {
        colors: vec!["yellow".into(), "red".into(), "black".into()],
        count: 3,
        bezier: true,
        ..Default::default()
    };
    let report = commands::scale_colors(&options, &config()).unwrap();
    assert_eq!(report.colors, vec!["#ffff00", "#bf5e0b", "#000000"]);
}

#[test]
fn test_scale_explicit_classes() {
    let options = ScaleOptions {
        colors: vec!["white".into(), "black".into()],
        classes: vec![0.0, 10.0, 50.0, 100.0],
        count: 0,
        mode: Some(Mode::Rgb),
        ..Default::default()
    };
    let report = commands::scale_colors(&options, &config()).unwrap();
    assert_eq!(report.domain, [0.0, 100.0]);
    assert_eq!(report.colors, vec!["#ffffff", "#808080", "#000000"]);
}

#[test]
fn test_scale_needs_colors() {
    let result = commands::scale_colors(&ScaleOptions::default(), &config());
    assert!(matches!(result, Err(SwatchError::NoColors)));

    let options = ScaleOptions {
        palette: Some("NoSuchPalette".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        commands::scale_colors(&options, &config()),
        Err(SwatchError::Color(ColorError::UnknownPalette(_)))
    ));
}

// ----------------------------------------------------------------------------
// delta-e / distance
// ----------------------------------------------------------------------------

#[test]
fn test_delta_e_and_distance() {
    let report = commands::delta_e_between("red", "orange", DeltaEWeights::default()).unwrap();
    assert_eq!(report.value, 33.7521);

    let report = commands::distance_between("red", "orange", Space::Lab).unwrap();
    assert_eq!(report.value, 61.3393);
    assert_eq!(report.metric, "euclidean lab");
}

// ----------------------------------------------------------------------------
// limits
// ----------------------------------------------------------------------------

#[test]
fn test_limits_from_array() {
    let fixture = Fixture::new();
    let path = fixture.file("data.json", datasets::ONE_TO_TEN);

    let report = commands::limits_for_file(&path, None, LimitMode::Quantile, 4).unwrap();
    assert_eq!(report.count, 10);
    assert_eq!(report.breaks, vec![1.0, 3.25, 5.5, 7.75, 10.0]);
}

#[test]
fn test_limits_from_objects_with_key() {
    let fixture = Fixture::new();
    let path = fixture.file("cities.json", datasets::CITIES);

    let report = commands::limits_for_file(&path, Some("pop"), LimitMode::Continuous, 3).unwrap();
    assert_eq!(report.min, 18000.0);
    assert_eq!(report.max, 173000.0);
    assert_eq!(report.breaks, vec![18000.0, 173000.0]);
}

#[test]
fn test_limits_logarithmic_skips_nulls() {
    let fixture = Fixture::new();
    let path = fixture.file("by_name.json", datasets::BY_NAME);

    let report = commands::limits_for_file(&path, None, LimitMode::Logarithmic, 2).unwrap();
    assert_eq!(report.count, 3);
    assert_eq!(report.breaks.len(), 3);
    assert!((report.breaks[1] - 16.0).abs() < 1e-9);
}

#[test]
fn test_limits_missing_file() {
    let fixture = Fixture::new();
    let path = fixture.dir.path().join("missing.json");

    assert!(matches!(
        commands::limits_for_file(&path, None, LimitMode::Equal, 5),
        Err(SwatchError::Io(_))
    ));
}

#[test]
fn test_report_text_output() {
    let report = commands::limits_for_values(&[1.0, 2.0, 3.0, 4.0, 5.0], LimitMode::Equal, 2).unwrap();
    assert_eq!(report.to_string(), "5 values, 1 .. 5\nequal breaks: 1, 3, 5");
}
