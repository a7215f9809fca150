//! Configuration module for Contact Harvester
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional and falls back to the built-in pacing defaults.
//!
//! # Example
//!
//! ```no_run
//! use contact_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("contacts.toml")).unwrap();
//! println!("Batch size: {}", config.crawler.batch_size);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, OutputFormat, RendererConfig, SiteEntry, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, parse_config, read_config};
pub use validation::validate;
