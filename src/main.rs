//! # Plume - A Small Text Editor
//!
//! Plain-text editing with a single document, an unsaved-changes indicator,
//! and a font preference that survives restarts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a file on launch
//! cargo run -- notes.txt
//!
//! # Keep font settings somewhere else
//! cargo run -- --settings ~/.plume_font
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plume_core::{Config, FontStore};
use plume_ui::{run, Flags};

/// Plume - a small plain-text editor
#[derive(Parser, Debug)]
#[command(name = "plume")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Font settings file (defaults to the config value)
    #[arg(short, long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Plume v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };

    let settings_path = args.settings.clone().unwrap_or_else(|| config.settings_path());
    let fonts = FontStore::open(&settings_path)
        .with_context(|| format!("Failed to load font settings from {}", settings_path.display()))?;
    tracing::debug!("Font preference: {} ({})", fonts.active(), fonts.path().display());

    let flags = Flags {
        file: args.file,
        config,
        fonts,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["plume"]);
        assert!(args.file.is_none());
        assert!(args.settings.is_none());
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_args_with_file_and_settings() {
        let args = Args::parse_from(["plume", "notes.txt", "--settings", "/tmp/font.txt", "-vv"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.settings, Some(PathBuf::from("/tmp/font.txt")));
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_verbosity_saturates() {
        let args = Args::parse_from(["plume", "-vvvvv"]);
        assert_eq!(args.log_level(), tracing::Level::TRACE);
    }
}
