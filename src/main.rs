//! # Discourse Topics
//!
//! Scrapes one Discourse category page and saves the first topics to a
//! timestamp-named JSON file.
//!
//! ## Usage
//!
//! ```sh
//! discourse_topics -o ./out
//! ```
//!
//! ## Pipeline
//!
//! 1. **Config**: defaults, then the optional YAML file, then flags
//! 2. **Scrape**: one GET of `base_url + category`, topic links extracted
//! 3. **Output**: records written as JSON; a failed fetch still writes `[]`

use chrono::Utc;
use clap::Parser;
use discourse_topics::config::ScraperConfig;
use discourse_topics::outputs::json;
use discourse_topics::scrapers::discourse::TopicScraper;
use discourse_topics::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::Cli;

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
    info!("discourse_topics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let from_file = match &args.config {
        Some(path) => Some(ScraperConfig::from_yaml_file(path).await?),
        None => None,
    };
    let config = args.scraper_config(from_file);

    // Early check: fail before the request if we can't write the result
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let scraper = TopicScraper::new(config)?;
    info!(
        base_url = %args.base_url,
        category = %scraper.config().category_path,
        max_topics = scraper.config().max_topics,
        "Scraping category"
    );
    let topics = scraper.extract_default(&args.base_url).await;

    let path = json::write_topics(&topics, &args.output_dir, Utc::now()).await?;
    println!("Scraped {} topics, saved to {}", topics.len(), path.display());

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        topics = topics.len(),
        "Execution complete"
    );

    Ok(())
}
