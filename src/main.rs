use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raster_dither::{Palette, PaletteColor, Rgb8};
use rasterink::codec::{self, ImageInfo};
use rasterink::config::{PipelineConfig, CONFIG_ENV};
use rasterink::pipeline::OutputMode;

#[derive(Parser)]
#[command(name = "rasterink")]
#[command(about = "Resize and dither images for e-ink panels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an image, run the processing pipeline, and encode the result
    Process {
        /// Input file (.jpg, .jpeg, .ppm, .pgm)
        input: PathBuf,

        /// Output file; format follows the extension (.jpg, .ppm, .png)
        #[arg(short, long)]
        output: PathBuf,

        /// Target width in pixels; height keeps the aspect ratio
        #[arg(short, long)]
        width: Option<usize>,

        /// Color reduction applied after resizing
        #[arg(short, long, value_enum, default_value_t = OutputMode::None)]
        mode: OutputMode,

        /// JPEG quality (clamped to 0..=100); overrides the config file
        #[arg(short, long)]
        quality: Option<i32>,

        /// Pipeline YAML file (defaults to $RASTERINK_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the dimensions and color space of an image as JSON
    Info {
        /// Input file
        input: PathBuf,
    },
    /// List the seven-color palette
    Palette,
    /// Show the palette entry nearest to a color
    Nearest {
        /// Color as hex, e.g. "#c0ffee" or "fa0"
        color: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rasterink=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Process {
            input,
            output,
            width,
            mode,
            quality,
            config,
        } => run_process_command(&input, &output, width, mode, quality, config),
        Commands::Info { input } => run_info_command(&input),
        Commands::Palette => {
            run_palette_command();
            Ok(())
        }
        Commands::Nearest { color } => run_nearest_command(&color),
    }
}

fn run_process_command(
    input: &Path,
    output: &Path,
    width: Option<usize>,
    mode: OutputMode,
    quality: Option<i32>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config_path = config_path.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let config = match config_path {
        Some(path) => PipelineConfig::load(&path)?,
        None => PipelineConfig::default(),
    };

    let pipeline = config.pipeline().with_options(width, mode);
    let quality = quality.unwrap_or(config.quality);

    let buffer = codec::decode_file(input)?;
    let buffer = pipeline
        .run(buffer)
        .with_context(|| format!("Processing {} failed", input.display()))?;
    codec::encode_file(&buffer, output, quality)?;

    tracing::info!(
        output = %output.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Done"
    );
    Ok(())
}

fn run_info_command(input: &Path) -> anyhow::Result<()> {
    let buffer = codec::decode_file(input)?;
    let info = serde_json::to_string_pretty(&ImageInfo::of(&buffer))?;
    println!("{info}");
    Ok(())
}

fn run_palette_command() {
    for color in PaletteColor::ALL {
        println!("{} {:<7} {}", color.index(), color.name(), color.rgb());
    }
}

fn run_nearest_command(color: &str) -> anyhow::Result<()> {
    let pixel: Rgb8 = color
        .parse()
        .with_context(|| format!("Invalid color '{color}'"))?;
    let (index, distance) = Palette::SEVEN_COLOR.find_nearest(pixel);
    let nearest = PaletteColor::from_index(index)
        .with_context(|| format!("Palette index {index} out of range"))?;
    println!(
        "{pixel} -> {} {} (distance {distance:.2})",
        nearest.name(),
        nearest.rgb()
    );
    Ok(())
}
