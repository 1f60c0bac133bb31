//! Command implementations behind the CLI.
//!
//! Every command returns a report struct that serializes to JSON for
//! `--json` and implements `Display` for the plain-text output.

use colorkit::{
    analyze, contrast, contrast_apca, delta_e, distance, mix, Bezier, ChannelEdit, Color,
    DeltaEWeights, Format, HexMode, Input, LimitMode, Mode, Scale, Space,
};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::SwatchConfig;
use crate::dataset;
use crate::error::SwatchError;

/// Read a color argument. Comma-separated numbers become a channel array;
/// a bare number is read as a number when the format expects one.
pub fn parse_color_arg(text: &str, format: Option<Format>) -> Input {
    if text.contains(',') {
        let channels: Result<Vec<f64>, _> = text.split(',').map(|p| p.trim().parse::<f64>()).collect();
        if let Ok(channels) = channels {
            return Input::Channels(channels);
        }
    }
    if matches!(format, Some(Format::Num | Format::Temperature)) {
        if let Ok(n) = text.trim().parse::<f64>() {
            return Input::Number(n);
        }
    }
    Input::Text(text.to_string())
}

fn read_color(text: &str, format: Option<Format>) -> Result<Color, SwatchError> {
    let input = parse_color_arg(text, format);
    let color = match format {
        Some(f) => Color::with_format(input, f)?,
        None => Color::new(input)?,
    };
    Ok(color)
}

fn round_to(x: f64, places: i32) -> f64 {
    let k = 10f64.powi(places);
    (x * k).round() / k
}

fn rounded<const N: usize>(values: [f64; N]) -> [f64; N] {
    values.map(|v| round_to(v, 4))
}

fn channels_text(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| if v.is_nan() { "none".to_string() } else { round_to(*v, 4).to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}

// ----------------------------------------------------------------------------
// convert
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub hex: String,
    pub name: String,
    pub css: String,
    pub rgb: [f64; 3],
    pub alpha: f64,
    pub clipped: bool,
    pub hsl: [f64; 3],
    pub hsv: [f64; 3],
    pub lab: [f64; 3],
    pub lch: [f64; 3],
    pub oklab: [f64; 3],
    pub oklch: [f64; 3],
    pub cmyk: [f64; 4],
    pub num: u32,
    pub temperature: f64,
    pub luminance: f64,
}

pub fn convert(
    text: &str,
    format: Option<Format>,
    config: &SwatchConfig,
) -> Result<ConvertReport, SwatchError> {
    let color = read_color(text, format)?;
    let white = config.white_point;
    Ok(ConvertReport {
        input: text.to_string(),
        hex: color.hex(HexMode::Auto),
        name: color.name(),
        css: color.css(config.css_mode),
        rgb: color.rgb(),
        alpha: color.alpha(),
        clipped: color.clipped(),
        hsl: rounded(color.hsl()),
        hsv: rounded(color.hsv()),
        lab: rounded(color.lab_in(white)),
        lch: rounded(color.lch_in(white)),
        oklab: rounded(color.oklab()),
        oklch: rounded(color.oklch()),
        cmyk: rounded(color.cmyk()),
        num: color.num(),
        temperature: round_to(color.temperature(), 0),
        luminance: round_to(color.luminance(), 4),
    })
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "hex          {}", self.hex)?;
        if self.name != self.hex {
            writeln!(f, "name         {}", self.name)?;
        }
        writeln!(f, "css          {}", self.css)?;
        writeln!(f, "rgb          {}", channels_text(&self.rgb))?;
        writeln!(f, "alpha        {}", self.alpha)?;
        writeln!(f, "hsl          {}", channels_text(&self.hsl))?;
        writeln!(f, "hsv          {}", channels_text(&self.hsv))?;
        writeln!(f, "lab          {}", channels_text(&self.lab))?;
        writeln!(f, "lch          {}", channels_text(&self.lch))?;
        writeln!(f, "oklab        {}", channels_text(&self.oklab))?;
        writeln!(f, "oklch        {}", channels_text(&self.oklch))?;
        writeln!(f, "cmyk         {}", channels_text(&self.cmyk))?;
        writeln!(f, "num          {}", self.num)?;
        writeln!(f, "temperature  {}K", self.temperature)?;
        write!(f, "luminance    {}", self.luminance)?;
        if self.clipped {
            write!(f, "\n(input was out of gamut and has been clipped)")?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// contrast
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub apca: f64,
    pub threshold: f64,
    pub passes: bool,
}

pub fn contrast_check(
    fg: &str,
    bg: &str,
    config: &SwatchConfig,
) -> Result<ContrastReport, SwatchError> {
    let fg = read_color(fg, None)?;
    let bg = read_color(bg, None)?;
    let ratio = contrast(&fg, &bg);
    Ok(ContrastReport {
        foreground: fg.hex(HexMode::Auto),
        background: bg.hex(HexMode::Auto),
        ratio: round_to(ratio, 2),
        apca: round_to(contrast_apca(&fg, &bg), 2),
        threshold: config.contrast_threshold,
        passes: ratio >= config.contrast_threshold,
    })
}

impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} on {}", self.foreground, self.background)?;
        writeln!(f, "WCAG ratio   {}:1", self.ratio)?;
        writeln!(f, "APCA Lc      {}", self.apca)?;
        write!(
            f,
            "{} (threshold {}:1)",
            if self.passes { "PASS" } else { "FAIL" },
            self.threshold
        )
    }
}

// ----------------------------------------------------------------------------
// mix
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MixReport {
    pub a: String,
    pub b: String,
    pub ratio: f64,
    pub mode: Mode,
    pub hex: String,
    pub css: String,
}

pub fn mix_colors(
    a: &str,
    b: &str,
    ratio: f64,
    mode: Option<Mode>,
    config: &SwatchConfig,
) -> Result<MixReport, SwatchError> {
    let ca = read_color(a, None)?;
    let cb = read_color(b, None)?;
    let mode = mode.unwrap_or(config.mode);
    let out = mix(&ca, &cb, ratio, mode);
    Ok(MixReport {
        a: ca.hex(HexMode::Auto),
        b: cb.hex(HexMode::Auto),
        ratio,
        mode,
        hex: out.hex(HexMode::Auto),
        css: out.css(config.css_mode),
    })
}

impl fmt::Display for MixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.hex, self.css)
    }
}

// ----------------------------------------------------------------------------
// adjust
// ----------------------------------------------------------------------------

/// Adjustments applied in a fixed order: darken, brighten, saturate,
/// desaturate, channel assignments, alpha, luminance.
#[derive(Debug, Clone, Default)]
pub struct AdjustOptions {
    pub darken: Option<f64>,
    pub brighten: Option<f64>,
    pub saturate: Option<f64>,
    pub desaturate: Option<f64>,
    /// `PATH=VALUE` pairs such as `lab.l=*0.5` or `hsl.h=+30`.
    pub set: Vec<String>,
    pub alpha: Option<f64>,
    pub luminance: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdjustReport {
    pub input: String,
    pub steps: Vec<String>,
    pub hex: String,
    pub css: String,
}

pub fn adjust(
    text: &str,
    options: &AdjustOptions,
    config: &SwatchConfig,
) -> Result<AdjustReport, SwatchError> {
    let mut color = read_color(text, None)?;
    let input = color.hex(HexMode::Auto);
    let mut steps = Vec::new();

    let amounts: [(&str, Option<f64>, fn(&Color, f64) -> Color); 4] = [
        ("darken", options.darken, Color::darken),
        ("brighten", options.brighten, Color::brighten),
        ("saturate", options.saturate, Color::saturate),
        ("desaturate", options.desaturate, Color::desaturate),
    ];
    for (name, amount, op) in amounts {
        if let Some(amount) = amount {
            color = op(&color, amount);
            steps.push(format!("{name} {amount}"));
        }
    }

    for assignment in &options.set {
        let (path, value) = assignment
            .split_once('=')
            .ok_or_else(|| SwatchError::Assignment(assignment.clone()))?;
        let edit: ChannelEdit = value.trim().parse()?;
        color.set_channel_in_place(path.trim(), edit)?;
        steps.push(format!("set {}", assignment.trim()));
    }

    if let Some(alpha) = options.alpha {
        color.set_alpha_in_place(alpha);
        steps.push(format!("alpha {alpha}"));
    }

    if let Some(target) = options.luminance {
        color = color.with_luminance(target, config.mode);
        steps.push(format!("luminance {target}"));
    }

    Ok(AdjustReport {
        input,
        steps,
        hex: color.hex(HexMode::Auto),
        css: color.css(config.css_mode),
    })
}

impl fmt::Display for AdjustReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.hex, self.css)
    }
}

// ----------------------------------------------------------------------------
// scale
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ScaleOptions {
    pub colors: Vec<String>,
    pub palette: Option<String>,
    pub count: usize,
    pub mode: Option<Mode>,
    pub domain: Vec<f64>,
    /// One value is a class count, several are explicit breaks.
    pub classes: Vec<f64>,
    pub gamma: Option<f64>,
    pub padding: Option<f64>,
    pub correct_lightness: bool,
    pub bezier: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            palette: None,
            count: 5,
            mode: None,
            domain: Vec::new(),
            classes: Vec::new(),
            gamma: None,
            padding: None,
            correct_lightness: false,
            bezier: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleReport {
    pub domain: [f64; 2],
    pub classes: Option<Vec<f64>>,
    pub colors: Vec<String>,
}

pub fn build_scale(options: &ScaleOptions, config: &SwatchConfig) -> Result<Scale, SwatchError> {
    let stops = match &options.palette {
        Some(name) => config.palette(name)?,
        None => options.colors.clone(),
    };
    if stops.is_empty() {
        return Err(SwatchError::NoColors);
    }
    let colors = stops
        .iter()
        .map(|s| read_color(s, None))
        .collect::<Result<Vec<_>, _>>()?;

    let mut scale = if options.bezier {
        Bezier::new(&colors)?.scale()
    } else {
        Scale::new(colors).mode(options.mode.unwrap_or(config.mode))
    };
    if !options.domain.is_empty() {
        scale = scale.domain(&options.domain);
    }
    scale = match options.classes.as_slice() {
        [] => scale,
        [n] => scale.class_count(n.max(0.0) as usize),
        breaks => scale.classes(breaks.to_vec()),
    };
    if let Some(gamma) = options.gamma {
        scale = scale.gamma(gamma);
    }
    if let Some(padding) = options.padding {
        scale = scale.padding(padding);
    }
    if options.correct_lightness {
        scale = scale.correct_lightness(true);
    }
    Ok(scale)
}

pub fn scale_colors(options: &ScaleOptions, config: &SwatchConfig) -> Result<ScaleReport, SwatchError> {
    let scale = build_scale(options, config)?;
    Ok(ScaleReport {
        domain: scale.domain_bounds(),
        classes: scale.class_breaks().map(<[f64]>::to_vec),
        colors: scale
            .colors(options.count)
            .iter()
            .map(|c| c.hex(HexMode::Auto))
            .collect(),
    })
}

impl fmt::Display for ScaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.colors.join(" "))
    }
}

// ----------------------------------------------------------------------------
// delta-e / distance
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DifferenceReport {
    pub a: String,
    pub b: String,
    pub metric: String,
    pub value: f64,
}

pub fn delta_e_between(
    a: &str,
    b: &str,
    weights: DeltaEWeights,
) -> Result<DifferenceReport, SwatchError> {
    let ca = read_color(a, None)?;
    let cb = read_color(b, None)?;
    Ok(DifferenceReport {
        a: ca.hex(HexMode::Auto),
        b: cb.hex(HexMode::Auto),
        metric: "ciede2000".to_string(),
        value: round_to(delta_e(&ca, &cb, weights), 4),
    })
}

pub fn distance_between(a: &str, b: &str, space: Space) -> Result<DifferenceReport, SwatchError> {
    let ca = read_color(a, None)?;
    let cb = read_color(b, None)?;
    Ok(DifferenceReport {
        a: ca.hex(HexMode::Auto),
        b: cb.hex(HexMode::Auto),
        metric: format!("euclidean {space}"),
        value: round_to(distance(&ca, &cb, space), 4),
    })
}

impl fmt::Display for DifferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} vs {})", self.value, self.a, self.b)
    }
}

// ----------------------------------------------------------------------------
// limits
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LimitsReport {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mode: LimitMode,
    pub breaks: Vec<f64>,
}

pub fn limits_for_values(values: &[f64], mode: LimitMode, classes: usize) -> Result<LimitsReport, SwatchError> {
    let analysis = analyze(values);
    let breaks = analysis.limits(mode, classes)?;
    Ok(LimitsReport {
        count: analysis.count,
        min: analysis.min,
        max: analysis.max,
        mode,
        breaks,
    })
}

pub fn limits_for_file(
    path: &Path,
    key: Option<&str>,
    mode: LimitMode,
    classes: usize,
) -> Result<LimitsReport, SwatchError> {
    let values = dataset::load(path, key)?;
    limits_for_values(&values, mode, classes)
}

impl fmt::Display for LimitsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} values, {} .. {}", self.count, self.min, self.max)?;
        write!(f, "{} breaks: {}", self.mode, channels_text(&self.breaks))
    }
}
