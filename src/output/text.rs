//! Plain-text console format
//!
//! One block per site:
//!
//! ```text
//! Website: https://example.com/
//! Emails: a@example.com, b@example.com
//! Social Media: Facebook: https://facebook.com/example
//! Phone Numbers: 555-123-4567
//!
//! ```

use crate::crawler::CrawlReport;
use crate::extract::ContactSignals;
use crate::output::traits::{OutputResult, OutputSink};
use std::collections::BTreeSet;
use std::io::Write;

/// Writes the text format to any writer
pub struct TextOutput<W: Write> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TextOutput<W> {
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()> {
        for (site, signals) in report.results.iter() {
            self.writer.write_all(format_site(site, signals).as_bytes())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Formats one site's block, including the trailing blank line
pub fn format_site(site: &str, signals: &ContactSignals) -> String {
    format!(
        "Website: {}\nEmails: {}\nSocial Media: {}\nPhone Numbers: {}\n\n",
        site,
        join(&signals.emails),
        join(&signals.social_media),
        join(&signals.phone_numbers)
    )
}

fn join(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
