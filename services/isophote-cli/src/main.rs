//! Brightness band and contour overlay tool.
//!
//! Reads an image, splits the chosen region into equal brightness bands,
//! traces one contour per band boundary and writes:
//! - the member count of every band to stdout (or a JSON report)
//! - optionally a PNG with bands painted and contours stroked over the image

mod input;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use contour_analysis::{analyze, AnalysisConfig, ThresholdDefaults};
use field_common::{Region, ScalarField};
use renderer::OverlayStyle;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use input::Frame;

#[derive(Parser, Debug)]
#[command(name = "isophote")]
#[command(about = "Brightness bands and contour lines for an image region")]
struct Args {
    /// Input image (PNG, TIFF, ...)
    input: PathBuf,

    /// Region of interest as x,y,width,height (default: whole image)
    #[arg(long)]
    roi: Option<Region>,

    /// Number of bands
    #[arg(short, long)]
    regions: Option<usize>,

    /// Low brightness bound
    #[arg(long, allow_negative_numbers = true)]
    low: Option<f64>,

    /// High brightness bound
    #[arg(long, allow_negative_numbers = true)]
    high: Option<f64>,

    /// Write the composited overlay to this PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Contour stroke width in pixels
    #[arg(long)]
    line_width: Option<f32>,

    /// Print a JSON report instead of the counts table
    #[arg(long)]
    json: bool,

    /// Run band and contour passes on all cores
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, env = "ISOPHOTE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Environment configuration with command line values on top.
    fn config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::from_env();
        if self.regions.is_some() {
            config.regions = self.regions;
        }
        if self.low.is_some() {
            config.low = self.low;
        }
        if self.high.is_some() {
            config.high = self.high;
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }
        config.parallel |= self.parallel;
        config
    }
}

fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();

    let config = args.config();
    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let frame = Frame::open(&args.input)?;
    let roi = args.roi.unwrap_or_else(|| frame.field.bounds());
    info!(
        input = %args.input.display(),
        width = frame.width(),
        height = frame.height(),
        roi = %roi,
        "Loaded image"
    );

    let defaults = ThresholdDefaults::suggest(&frame.field, roi)?;
    let spec = config.band_spec(&defaults)?;
    info!(
        low = spec.low(),
        high = spec.high(),
        regions = spec.regions(),
        "Resolved band thresholds"
    );

    let analysis = analyze(&frame.field, roi, &spec, config.options())?;

    if let Some(path) = &args.output {
        let style = OverlayStyle {
            line_color: config.line_color,
            line_width: config.line_width,
            ..OverlayStyle::default()
        };
        let bytes = output::write_overlay(
            path,
            &frame.base,
            frame.width(),
            frame.height(),
            &analysis,
            &style,
        )?;
        info!(output = %path.display(), bytes = bytes, "Wrote overlay");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output::write_json(&mut out, &analysis)?;
    } else {
        output::write_counts(&mut out, &analysis)?;
    }

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "Done");
    Ok(())
}
