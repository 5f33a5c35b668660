//! Engagement Chart
//!
//! Builds the "Engagement: Messages Over Time" chart from JSON fixtures and
//! writes it as JSON, as a PNG, or shows it in a window.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engagement_chart::plotting::render_to_file;
use engagement_chart::{ChartInput, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "engagement-chart", version, about)]
struct Args {
    /// JSON file with `{ count, timeBucket, channelId }` records
    #[arg(short, long)]
    messages: PathBuf,

    /// JSON file with `{ id, name }` records
    #[arg(short, long)]
    channels: PathBuf,

    /// Write the chart configuration as JSON ("-" for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Render the chart to an image file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Reject counts and time buckets that do not parse
    #[arg(long)]
    strict: bool,

    /// Show the chart in a window
    #[arg(long)]
    view: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_json(target: &Path, json: &str) -> Result<()> {
    if target.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    } else {
        std::fs::write(target, json)
            .with_context(|| format!("failed to write {}", target.display()))?;
        info!("Chart configuration written to {:?}", target);
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let input = ChartInput::from_files(&args.messages, &args.channels)
        .context("failed to load chart input")?;

    let config = if args.strict {
        input
            .try_build_configuration()
            .context("input contains values that do not parse")?
    } else {
        input.build_configuration()
    };
    info!(
        "Built chart with {} series from {} messages and {} channels",
        config.series.len(),
        input.messages.len(),
        input.channels.len()
    );

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        ..Default::default()
    };

    let json_target = match (&args.json, &args.png, args.view) {
        (Some(path), _, _) => Some(path.clone()),
        (None, None, false) => Some(PathBuf::from("-")),
        _ => None,
    };
    if let Some(target) = json_target {
        write_json(&target, &config.to_json_string(true)?)?;
    }

    if let Some(path) = &args.png {
        render_to_file(&config, path, &options)
            .with_context(|| format!("failed to render {}", path.display()))?;
    }

    if args.view {
        engagement_chart::app::run_viewer(config, options)
            .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))?;
    }

    Ok(())
}
