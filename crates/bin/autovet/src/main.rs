//! # autovet — automation file checker
//!
//! Composition root that wires the filesystem adapter to the validation
//! service and prints a report.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize logging
//! - Construct the document source (adapter) and the validation service
//! - Print the per-document report and totals
//! - Exit non-zero when any automation is invalid
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no validation logic belongs here.

mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use autovet_adapter_yaml_fs::YamlFsSource;
use autovet_app::services::validation_service::ValidationService;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

/// Validate automation files before they reach a live system.
#[derive(Debug, Parser)]
#[command(name = "autovet", version)]
struct Cli {
    /// File or directory to validate. Overrides the config file and `AUTOVET_ROOT`.
    path: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.path {
        config.override_root(path);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let root = config.scan.root.clone();
    if !root.exists() {
        println!("❌ Directory not found: {}", root.display());
        return Ok(ExitCode::FAILURE);
    }
    println!("🔍 Searching for automation files in: {}", root.display());
    tracing::info!(root = %root.display(), extensions = ?config.scan.extensions, "starting scan");

    let source = YamlFsSource::new(root).with_extensions(config.scan.extensions);
    let service = ValidationService::new(source);
    let report = service.scan().await?;

    if report.entries.is_empty() {
        println!("⚠️  No automation files found");
        return Ok(ExitCode::SUCCESS);
    }
    println!("📊 Found {} file(s)", report.entries.len());
    print!("{}", output::render_report(&report));

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
