use clap::{Parser, Subcommand};
use colorkit::{DeltaEWeights, Format, LimitMode, Mode, Space};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatch::commands::{self, AdjustOptions, ScaleOptions};
use swatch::SwatchConfig;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Color conversion, palette scales and contrast checks")]
struct Cli {
    /// YAML config file (default: $SWATCH_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported representation
    Convert {
        /// Color as hex, name, CSS function or comma-separated channels
        color: String,

        /// Input format (e.g. "hsl", "lab", "num", "kelvin"); autodetected if omitted
        #[arg(short, long)]
        format: Option<Format>,
    },
    /// WCAG and APCA contrast of a foreground over a background
    Contrast {
        foreground: String,
        background: String,
    },
    /// Mix two colors
    Mix {
        a: String,
        b: String,

        /// 0 gives A, 1 gives B
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f64,

        /// Interpolation mode (e.g. "rgb", "lrgb", "lab", "lch", "oklch")
        #[arg(short, long)]
        mode: Option<Mode>,
    },
    /// Darken, brighten, saturate or edit channels of a color
    Adjust {
        color: String,

        #[arg(long)]
        darken: Option<f64>,

        #[arg(long)]
        brighten: Option<f64>,

        #[arg(long)]
        saturate: Option<f64>,

        #[arg(long)]
        desaturate: Option<f64>,

        /// Channel assignment like "lab.l=50", "hsl.h=+30" or "lch.c=*0.5" (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        set: Vec<String>,

        #[arg(long)]
        alpha: Option<f64>,

        /// Target WCAG relative luminance in [0, 1]
        #[arg(long)]
        luminance: Option<f64>,
    },
    /// Sample colors from a scale
    Scale {
        /// Stop colors
        colors: Vec<String>,

        /// Config or ColorBrewer palette name instead of explicit colors
        #[arg(short, long)]
        palette: Option<String>,

        /// Number of colors to sample (0: class midpoints or domain ends)
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        #[arg(short, long)]
        mode: Option<Mode>,

        /// Comma-separated domain, e.g. "0,100" or "0,10,100"
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        domain: Vec<f64>,

        /// A class count, or comma-separated class breaks
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        classes: Vec<f64>,

        #[arg(long)]
        gamma: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        padding: Option<f64>,

        /// Even out Lab lightness along the scale
        #[arg(long)]
        correct_lightness: bool,

        /// Interpolate along a Lab bezier curve through the colors
        #[arg(long)]
        bezier: bool,
    },
    /// CIEDE2000 color difference
    DeltaE {
        a: String,
        b: String,

        #[arg(long, default_value_t = 1.0)]
        kl: f64,

        #[arg(long, default_value_t = 1.0)]
        kc: f64,

        #[arg(long, default_value_t = 1.0)]
        kh: f64,
    },
    /// Euclidean distance in a color space
    Distance {
        a: String,
        b: String,

        #[arg(short, long, default_value = "lab")]
        space: Space,
    },
    /// Class breaks for a JSON dataset
    Limits {
        /// JSON file: array of numbers, array of objects (with --key) or object of numbers
        file: PathBuf,

        /// Numeric field to read from each object
        #[arg(short, long)]
        key: Option<String>,

        /// equal, quantile, logarithmic, kmeans or continuous
        #[arg(short, long, default_value = "equal")]
        mode: LimitMode,

        #[arg(short, long, default_value_t = 5)]
        classes: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "swatch=debug,colorkit=debug"
    } else {
        "swatch=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = SwatchConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Convert { color, format } => {
            emit(&commands::convert(&color, format, &config)?, cli.json)
        }
        Commands::Contrast {
            foreground,
            background,
        } => emit(
            &commands::contrast_check(&foreground, &background, &config)?,
            cli.json,
        ),
        Commands::Mix { a, b, ratio, mode } => {
            emit(&commands::mix_colors(&a, &b, ratio, mode, &config)?, cli.json)
        }
        Commands::Adjust {
            color,
            darken,
            brighten,
            saturate,
            desaturate,
            set,
            alpha,
            luminance,
        } => {
            let options = AdjustOptions {
                darken,
                brighten,
                saturate,
                desaturate,
                set,
                alpha,
                luminance,
            };
            emit(&commands::adjust(&color, &options, &config)?, cli.json)
        }
        Commands::Scale {
            colors,
            palette,
            count,
            mode,
            domain,
            classes,
            gamma,
            padding,
            correct_lightness,
            bezier,
        } => {
            let options = ScaleOptions {
                colors,
                palette,
                count,
                mode,
                domain,
                classes,
                gamma,
                padding,
                correct_lightness,
                bezier,
            };
            emit(&commands::scale_colors(&options, &config)?, cli.json)
        }
        Commands::DeltaE { a, b, kl, kc, kh } => {
            let weights = DeltaEWeights { l: kl, c: kc, h: kh };
            emit(&commands::delta_e_between(&a, &b, weights)?, cli.json)
        }
        Commands::Distance { a, b, space } => {
            emit(&commands::distance_between(&a, &b, space)?, cli.json)
        }
        Commands::Limits {
            file,
            key,
            mode,
            classes,
        } => emit(
            &commands::limits_for_file(&file, key.as_deref(), mode, classes)?,
            cli.json,
        ),
    }
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
