//! Discourse category page scraper.
//!
//! Fetches one category page (for example
//! `https://discourse.example.com/c/courses/tds-kb/34`) and turns the first
//! topic links on it into [`TopicRecord`]s, in document order.
//!
//! # Selector
//!
//! Topic links are found with a CSS selector, `a.topic-title` by default.
//! That class belongs to the stock Discourse theme. A forum with a custom
//! theme may not use it, in which case nothing matches and the result is
//! empty. Use [`TopicMatcher::parse`] to supply a different selector.
//!
//! # URL Resolution
//!
//! See [`resolve_topic_url`]. Only root-relative links are made absolute.

use crate::config::{DEFAULT_TOPIC_SELECTOR, ScraperConfig};
use crate::error::{ConfigError, FetchFailure};
use crate::models::TopicRecord;
use crate::utils::truncate_for_log;
use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument};

static DEFAULT_MATCHER: Lazy<TopicMatcher> = Lazy::new(|| TopicMatcher {
    css: DEFAULT_TOPIC_SELECTOR.to_string(),
    selector: Selector::parse(DEFAULT_TOPIC_SELECTOR).unwrap(),
});

/// Resolve a topic link against the forum base URL.
///
/// A root-relative `href` (starting with `/`) is appended to `base_url` as-is.
/// Anything else, including bare relative paths like `t/slug/1`, is returned
/// verbatim.
///
/// Known defect: bare relative paths are not resolved against the page URL,
/// and protocol-relative links (`//host/path`) are treated as root-relative.
///
/// ```ignore
/// assert_eq!(resolve_topic_url("https://f.io", "/t/a/1"), "https://f.io/t/a/1");
/// assert_eq!(resolve_topic_url("https://f.io", "t/a/1"), "t/a/1");
/// ```
pub fn resolve_topic_url(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{base_url}{href}")
    } else {
        href.to_string()
    }
}

/// CSS selector that picks out topic links on a category page.
#[derive(Debug, Clone)]
pub struct TopicMatcher {
    css: String,
    selector: Selector,
}

impl Default for TopicMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

impl TopicMatcher {
    pub fn parse(css: &str) -> Result<Self, ConfigError> {
        Selector::parse(css)
            .map(|selector| Self {
                css: css.to_string(),
                selector,
            })
            .map_err(|e| ConfigError::InvalidSelector {
                selector: css.to_string(),
                reason: e.to_string(),
            })
    }

    /// The selector text this matcher was built from.
    pub fn as_str(&self) -> &str {
        &self.css
    }

    /// Extract up to `max_topics` records from an already-fetched page.
    ///
    /// Titles are the trimmed text content of each matched element. A missing
    /// `href` becomes an empty URL. Each record is stamped with the current
    /// UTC time as it is built.
    pub fn extract_from_html(
        &self,
        html: &str,
        base_url: &str,
        max_topics: usize,
    ) -> Vec<TopicRecord> {
        let document = Html::parse_document(html);
        let found = document.select(&self.selector).count();

        let topics: Vec<TopicRecord> = document
            .select(&self.selector)
            .take(max_topics)
            .map(|element| {
                let title = element.text().collect::<String>();
                let href = element.value().attr("href").unwrap_or_default();
                TopicRecord::new(title.trim(), resolve_topic_url(base_url, href), Utc::now())
            })
            .collect();

        info!(
            selector = %self.css,
            found,
            kept = topics.len(),
            "Extracted topics from category page"
        );
        topics
    }
}

/// Fetches Discourse category pages and extracts topic records.
///
/// Holds one HTTP client configured with the user agent and timeout from
/// [`ScraperConfig`]; reuse a scraper to reuse its connection pool.
#[derive(Debug, Clone)]
pub struct TopicScraper {
    client: Client,
    matcher: TopicMatcher,
    config: ScraperConfig,
}

impl TopicScraper {
    /// Build a scraper from a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroMaxTopics`] or [`ConfigError::InvalidSelector`]
    ///   if the configuration is invalid
    /// - [`ConfigError::Client`] if the HTTP client cannot be built (for
    ///   example, a user agent containing control characters)
    pub fn new(config: ScraperConfig) -> Result<Self, ConfigError> {
        if config.max_topics == 0 {
            return Err(ConfigError::ZeroMaxTopics);
        }
        let matcher = TopicMatcher::parse(&config.topic_selector)?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            matcher,
            config,
        })
    }

    /// Replace the topic matcher.
    pub fn with_matcher(mut self, matcher: TopicMatcher) -> Self {
        self.config.topic_selector = matcher.as_str().to_string();
        self.matcher = matcher;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Scrape `base_url + category_path`, returning an empty list on fetch failure.
    ///
    /// The failure is logged at `error` level. Callers that need to tell "no
    /// topics" apart from "fetch failed" should use [`Self::try_extract`].
    pub async fn extract(
        &self,
        base_url: &str,
        category_path: &str,
        max_topics: usize,
    ) -> Vec<TopicRecord> {
        match self.try_extract(base_url, category_path, max_topics).await {
            Ok(topics) => topics,
            Err(e) => {
                error!(
                    url = %e.url(),
                    timeout = e.is_timeout(),
                    error = %e,
                    "HTTP error occurred; returning no topics"
                );
                Vec::new()
            }
        }
    }

    /// Scrape using the configured default category path and topic cap.
    pub async fn extract_default(&self, base_url: &str) -> Vec<TopicRecord> {
        self.extract(base_url, &self.config.category_path, self.config.max_topics)
            .await
    }

    /// Scrape `base_url + category_path`, surfacing fetch failures.
    ///
    /// The URL is built by plain concatenation; duplicate slashes and query
    /// strings are passed through untouched.
    ///
    /// # Errors
    ///
    /// [`FetchFailure`] on a transport error, timeout, or non-2xx status.
    #[instrument(level = "info", skip(self))]
    pub async fn try_extract(
        &self,
        base_url: &str,
        category_path: &str,
        max_topics: usize,
    ) -> Result<Vec<TopicRecord>, FetchFailure> {
        let url = format!("{base_url}{category_path}");
        let body = self.fetch(&url).await?;

        let topics = self.matcher.extract_from_html(&body, base_url, max_topics);
        if topics.is_empty() {
            debug!(
                %url,
                body_preview = %truncate_for_log(&body, 300),
                "No topic elements matched"
            );
        }
        Ok(topics)
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        debug!(%url, "Fetching category page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchFailure::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchFailure::Transport {
                url: url.to_string(),
                source,
            })?;
        debug!(bytes = body.len(), "Fetched category page");
        Ok(body)
    }
}
