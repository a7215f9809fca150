//! Contact Harvester main entry point
//!
//! This is the command-line interface for the Contact Harvester crawler.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use contact_harvester::config::{
    compute_config_hash, read_config, validate, Config, OutputFormat, SiteEntry,
};
use contact_harvester::crawler::crawl;
use contact_harvester::output::write_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Contact Harvester: a polite contact-signal crawler
///
/// Visits each site's entry page, follows its same-site links in small
/// batches, and reports the emails, phone numbers and social-media profiles
/// found along the way.
#[derive(Parser, Debug)]
#[command(name = "contact-harvester")]
#[command(version)]
#[command(about = "A polite contact-signal crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Site to crawl, appended to the configured sites (repeatable)
    #[arg(long = "site", value_name = "URL")]
    sites: Vec<String>,

    /// Output format, overriding the configuration
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_harvester=info,warn"),
            1 => EnvFilter::new("contact_harvester=debug,info"),
            2 => EnvFilter::new("contact_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any), applies CLI overrides, then validates
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = read_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            let hash = compute_config_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    config
        .sites
        .extend(cli.sites.iter().map(|url| SiteEntry { url: url.clone() }));

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if let Some(path) = &cli.output {
        config.output.path = Some(path.clone());
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Contact Harvester Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Batch size: {}", config.crawler.batch_size);
    println!("  Settle delay: {}ms", config.crawler.settle_delay);
    println!("  Batch delay: {}ms", config.crawler.batch_delay);
    println!("  Site delay: {}ms", config.crawler.site_delay);
    println!("  Navigation timeout: {}ms", config.crawler.navigation_timeout);
    println!("  Include entry page: {}", config.crawler.include_entry_page);

    println!("\nRenderer:");
    println!("  Headless: {}", config.renderer.headless);
    println!(
        "  Viewport: {}x{}",
        config.renderer.viewport_width, config.renderer.viewport_height
    );
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    println!(
        "  Destination: {}",
        config.output.path.as_deref().unwrap_or("stdout")
    );

    println!("\nSites ({}):", config.sites.len());
    for site in &config.sites {
        println!("  - {}", site.url);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting crawl of {} sites", config.sites.len());

    let report = match crawl(config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    write_report(&report, &config.output).context("Failed to write results")?;
    tracing::info!("Crawl completed successfully");
    Ok(())
}
