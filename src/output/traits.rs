//! Output sink trait and errors
//!
//! This module defines the trait interface result sinks implement.

use crate::crawler::CrawlReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for result sinks
///
/// A sink receives the finished report once, after every site has been
/// crawled.
pub trait OutputSink {
    /// Writes the report
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()>;
}
