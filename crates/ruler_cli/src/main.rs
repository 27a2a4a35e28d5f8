//! Ruler - headless driver for the ruler slider
//!
//! Provides:
//! - `simulate`: replay a JSON gesture script and report every value update
//! - `render`: draw the ruler at a given value and drag offset as text

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruler_cli::ascii::render_ruler;
use ruler_cli::{RulerConfig, Script};
use ruler_slider::Slider;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Headless driver for the ruler slider
#[derive(Parser, Debug)]
#[command(name = "ruler")]
#[command(about = "Drive a ruler slider from scripts and render it as text")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script
    Simulate {
        /// Ruler config (ruler.toml); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Gesture script (JSON)
        #[arg(short, long)]
        script: PathBuf,

        /// Write the report to this relative path instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Print the ruler as text
    Render {
        /// Ruler config (ruler.toml); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Value to jump to before rendering
        #[arg(long, allow_hyphen_values = true)]
        value: Option<f64>,

        /// Extra drag offset in pixels, applied after the value
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: f64,

        /// Viewport width in pixels (overrides the config)
        #[arg(long)]
        width: Option<f64>,

        /// Output width in characters
        #[arg(long, default_value = "72")]
        columns: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Simulate {
            config,
            script,
            report,
        } => cmd_simulate(config.as_deref(), &script, report.as_deref()),
        Command::Render {
            config,
            value,
            offset,
            width,
            columns,
        } => cmd_render(config.as_deref(), value, offset, width, columns),
    }
}

fn load_config(path: Option<&Path>) -> Result<RulerConfig> {
    match path {
        Some(path) => RulerConfig::load(path),
        None => Ok(RulerConfig::default()),
    }
}

fn cmd_simulate(config: Option<&Path>, script: &Path, report_path: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let script = Script::from_path(script)?;

    tracing::info!(steps = script.steps.len(), "Running gesture script");
    let report = ruler_cli::run_script(&script, &config)?;

    match report_path {
        Some(path) => {
            report.write_to_path(path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    }

    if report.is_failed() {
        anyhow::bail!(
            "step {} ({}) failed: {}",
            report.failed_step_index.unwrap_or_default(),
            report.assertion.as_deref().unwrap_or("unknown"),
            report.message.as_deref().unwrap_or("")
        );
    }

    tracing::info!(
        value = report.final_state.value,
        updates = report.updates.len(),
        "Script passed"
    );
    Ok(())
}

fn cmd_render(
    config: Option<&Path>,
    value: Option<f64>,
    offset: f64,
    width: Option<f64>,
    columns: usize,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(width) = width {
        config.set_viewport_width(width).context("Invalid --width")?;
    }
    let viewport_width = config.display.viewport_width;

    let mut slider = Slider::new(config.slider.clone())?.with_formatter(config.formatter());
    if let Some(value) = value {
        slider.set_value(value)?;
    }
    slider.apply_offset_delta(offset);

    let layout = slider.layout(viewport_width);
    print!(
        "{}",
        render_ruler(&layout, columns, &slider.formatted_value())
    );
    Ok(())
}
