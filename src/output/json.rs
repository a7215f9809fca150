//! Structured JSON format: one record per site plus run statistics

use crate::crawler::CrawlReport;
use crate::output::stats::CrawlStatistics;
use crate::output::traits::{OutputResult, OutputSink};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

#[derive(Debug, Serialize)]
struct SiteRecord<'a> {
    site: &'a str,
    emails: &'a BTreeSet<String>,
    social_media: &'a BTreeSet<String>,
    phone_numbers: &'a BTreeSet<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    sites: Vec<SiteRecord<'a>>,
    statistics: &'a CrawlStatistics,
}

/// Writes pretty-printed JSON to any writer
pub struct JsonOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonOutput<W> {
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()> {
        let document = JsonReport {
            sites: report
                .results
                .iter()
                .map(|(site, signals)| SiteRecord {
                    site,
                    emails: &signals.emails,
                    social_media: &signals.social_media,
                    phone_numbers: &signals.phone_numbers,
                })
                .collect(),
            statistics: &report.statistics,
        };

        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
