//! # Discourse Topics
//!
//! Scrapes the latest topics from a Discourse forum category page and
//! returns them as [`TopicRecord`]s: trimmed title, absolute URL, and the
//! UTC time each record was captured.
//!
//! ```ignore
//! use discourse_topics::{ScraperConfig, TopicScraper};
//!
//! let scraper = TopicScraper::new(ScraperConfig::default())?;
//! let topics = scraper
//!     .extract("https://discourse.example.com", "/c/announcements/5", 10)
//!     .await;
//! ```
//!
//! [`TopicScraper::extract`] never fails: a fetch error is logged and yields
//! an empty list. [`TopicScraper::try_extract`] returns the
//! [`FetchFailure`] instead.

pub mod config;
pub mod error;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;

pub use config::ScraperConfig;
pub use error::{ConfigError, FetchFailure, OutputError};
pub use models::TopicRecord;
pub use scrapers::discourse::{TopicMatcher, TopicScraper, resolve_topic_url};
