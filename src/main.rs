//! MKV subtitle extractor
//!
//! Extracts SRT, SSA and ASS subtitle tracks from Matroska files into
//! Advanced SubStation Alpha scripts, interactively or from scripts.

mod cli;
mod config;
mod config_file;
mod display;
mod error;
mod interactive;
mod progress;
mod run;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::{ExtractorConfig, LogFormat};
use crate::config_file::load_config;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "mkv-sub-extractor";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref());
    let config = loaded.config.with_cli(&cli);

    init_logging(&config);
    if let Some(warning) = loaded.warning {
        tracing::warn!("{}", warning);
    }

    tracing::debug!("{} v{} starting", APP_NAME, VERSION);
    tracing::debug!("Configuration loaded: {:?}", config);

    ExitCode::from(run::run(&cli, &config))
}

/// Initialize logging with tracing. `RUST_LOG` takes precedence over the
/// configured level; output goes to stderr.
fn init_logging(config: &ExtractorConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}
