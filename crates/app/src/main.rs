//! Steplight - Main Entry Point
//!
//! Reads a run summary, builds the configured export and writes it to disk.

mod cli;

use clap::Parser;
use steplight_application::{ExportReport, ExportReportOutput};
use steplight_infrastructure::{
    ExportWriter, InputReader, PendingExports, SystemClock, TokioFileSystem,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let reader = InputReader::new(TokioFileSystem::new());

    let file_options = match &cli.options {
        Some(path) => reader.read_options(path).await?,
        None => Default::default(),
    };
    let options = cli.overlay(file_options);
    let summary = reader.read_summary(&cli.summary).await?;

    let mut exports = PendingExports::new();
    let output = ExportReport::new(SystemClock::new(), options).on_run_done(
        None,
        &summary,
        &mut exports,
    )?;

    if let ExportReportOutput::Skipped { reason } = output {
        tracing::warn!(reason = %reason, "nothing exported");
        return Ok(());
    }

    let writer = ExportWriter::new(TokioFileSystem::new(), &cli.out_dir);
    for export in exports.drain() {
        writer.write(&export).await?;
    }

    Ok(())
}
