/*
 * This is the windowed frontend for the Fractree library.
 *
 * Keys:
 *   ↑ / ↓     grow or shrink the recursion depth
 *   ← / →     bend the branches
 *   space     switch between summer and winter trees
 *   escape    quit
 */
mod config;

use anyhow::{anyhow, Result};
use ansi_term::Colour;
use clap::{ArgAction, Parser};
use fractree_graphics::{available_backends, create_backend, report_error, DisplayBackend};
use fractree_lib::{Season, VERSION};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;

/// Interactive fractal tree
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CommandLineArguments {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display backend (minifb or pixels, depending on compiled features)
    #[arg(short, long)]
    backend: Option<String>,

    /// Log verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn select_backend(requested: Option<&str>) -> Result<Box<dyn DisplayBackend>> {
    let available = available_backends();
    let name = match requested {
        Some(name) => name,
        None => available
            .first()
            .copied()
            .ok_or_else(|| anyhow!("No display backend compiled in, enable minifb-backend or pixels-backend"))?,
    };

    create_backend(name).ok_or_else(|| {
        anyhow!(
            "Unknown display backend '{}', available: {}",
            name,
            available.join(", ")
        )
    })
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    setup_logging(parameters.verbose);

    let config = match parameters.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    let backend = select_backend(parameters.backend.as_deref())?;
    let viewer = config.viewer();

    println!(
        "{}",
        Colour::Green.paint(format!("Welcome in Fractree version {}", VERSION))
    );
    println!(
        "The maximum recursion depth range is [1, {}] in summer mode",
        config.limits().max_depth(Season::Summer)
    );
    info!(backend = backend.name(), "starting display");

    // errors from the display are reported, they do not fail the process
    if let Err(e) = backend.run(viewer) {
        report_error(&e);
    }

    Ok(())
}
