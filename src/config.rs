//! Scraper configuration with documented defaults.
//!
//! Every field has a default, so a YAML config file only needs to name the
//! fields it changes:
//!
//! ```yaml
//! topic_selector: "a.raw-topic-link"
//! max_topics: 25
//! ```

use crate::error::ConfigError;
use crate::scrapers::discourse::TopicMatcher;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; DiscourseScraper/1.0)";
/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// CSS selector for topic title links in the stock Discourse theme.
pub const DEFAULT_TOPIC_SELECTOR: &str = "a.topic-title";
/// Category path used when none is given.
pub const DEFAULT_CATEGORY_PATH: &str = "/c";
/// Topic cap used when none is given.
pub const DEFAULT_MAX_TOPICS: usize = 10;

/// Settings for a [`TopicScraper`](crate::scrapers::discourse::TopicScraper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// CSS selector matching one element per topic link.
    pub topic_selector: String,
    pub category_path: String,
    pub max_topics: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            topic_selector: DEFAULT_TOPIC_SELECTOR.to_string(),
            category_path: DEFAULT_CATEGORY_PATH.to_string(),
            max_topics: DEFAULT_MAX_TOPICS,
        }
    }
}

impl ScraperConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(
            selector = %config.topic_selector,
            max_topics = config.max_topics,
            "Loaded scraper configuration"
        );
        Ok(config)
    }

    /// Reject a zero topic cap and selectors that do not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_topics == 0 {
            return Err(ConfigError::ZeroMaxTopics);
        }
        TopicMatcher::parse(&self.topic_selector)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.user_agent, "Mozilla/5.0 (compatible; DiscourseScraper/1.0)");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.topic_selector, "a.topic-title");
        assert_eq!(config.category_path, "/c");
        assert_eq!(config.max_topics, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ScraperConfig::from_yaml_str("max_topics: 25\ntimeout_secs: 3\n").unwrap();
        assert_eq!(config.max_topics, 25);
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.topic_selector, DEFAULT_TOPIC_SELECTOR);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.category_path, DEFAULT_CATEGORY_PATH);
    }

    #[test]
    fn test_zero_max_topics_rejected() {
        let err = ScraperConfig::from_yaml_str("max_topics: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxTopics));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let err = ScraperConfig::from_yaml_str("topic_selector: \"a..topic-title\"\n").unwrap_err();
        match err {
            ConfigError::InvalidSelector { selector, .. } => assert_eq!(selector, "a..topic-title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = ScraperConfig::from_yaml_str("max_topics: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "topic_selector: \"a.raw-topic-link\"").unwrap();
        writeln!(file, "category_path: \"/c/announcements/5\"").unwrap();

        let config = ScraperConfig::from_yaml_file(file.path()).await.unwrap();
        assert_eq!(config.topic_selector, "a.raw-topic-link");
        assert_eq!(config.category_path, "/c/announcements/5");
        assert_eq!(config.max_topics, DEFAULT_MAX_TOPICS);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScraperConfig::from_yaml_file(&dir.path().join("nope.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
