//! # Diario Crítico
//!
//! Scrapes headlines from a short list of public pages, attaches a critical
//! commentary chosen from the sentiment of each summary, and writes a dated
//! markdown note ready for static publishing.
//!
//! ## Usage
//!
//! ```sh
//! diario_critico                      # built-in sources, writes ./docs/nota_YYYYMMDD.md
//! diario_critico -c diario.yaml -j ./api
//! ```
//!
//! ## Architecture
//!
//! One run is a linear pipeline:
//! 1. **Scraping**: fetch each source and pair its headings with paragraphs
//! 2. **Classification**: label every summary positive or negative
//! 3. **Commentary**: fill one of two templates with a summary excerpt
//! 4. **Output**: compose the markdown note and write it (plus optional JSON
//!    copy and index)

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod commentary;
mod config;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod sentiment;
mod utils;

use cli::Cli;
use config::Config;
use sentiment::Classifier;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("diario_critico starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, sources = args.sources.len(), "Parsed CLI arguments");

    // ---- Configuration ----
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = args.apply(config);
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }
    info!(
        sources = config.sources.len(),
        output_dir = %config.output_dir.display(),
        "Configuration ready"
    );

    // Loaded once, shared by every article.
    let classifier = Classifier::from_config(&config.classifier)?;

    let today = Local::now().date_naive();
    let report = pipeline::run(&config, &classifier, today).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.articles,
        failed_sources = report.failed_sources,
        note = ?report.note_path,
        "Execution complete"
    );
    Ok(())
}
