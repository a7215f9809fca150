//! Output module for crawl results
//!
//! This module handles:
//! - Writing per-site results in the console text format
//! - Exporting results as structured JSON
//! - Recording crawl statistics

mod json;
pub mod stats;
mod text;
mod traits;

pub use json::JsonOutput;
pub use stats::{log_statistics, CrawlStatistics};
pub use text::{format_site, TextOutput};
pub use traits::{OutputError, OutputResult, OutputSink};

use crate::config::{OutputConfig, OutputFormat};
use crate::crawler::CrawlReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Writes a report with the configured format and destination
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `config` - Output format and optional file path (stdout when absent)
pub fn write_report(report: &CrawlReport, config: &OutputConfig) -> OutputResult<()> {
    let writer: Box<dyn Write> = match &config.path {
        Some(path) => {
            tracing::info!("Writing results to {}", path);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    let mut sink: Box<dyn OutputSink> = match config.format {
        OutputFormat::Text => Box::new(TextOutput::new(writer)),
        OutputFormat::Json => Box::new(JsonOutput::new(writer)),
    };

    sink.write_report(report)
}
