//! Command-line interface definitions.
//!
//! Every flag is optional. With no flags the binary scrapes the hardcoded
//! forum category below and writes the result to the current directory.

use clap::Parser;
use discourse_topics::config::ScraperConfig;
use std::path::PathBuf;
use url::Url;

/// Forum scraped when `--base-url` is not given.
pub const DEFAULT_FORUM_URL: &str = "https://discourse.onlinedegree.iitm.ac.in";
/// Category scraped when neither `--category` nor a config file names one.
pub const DEFAULT_FORUM_CATEGORY: &str = "/c/courses/tds-kb/34";

/// Command-line arguments for the Discourse topic scraper.
///
/// Precedence for the category path and topic cap is: flag, then the config
/// file (whose own defaults are `/c` and 10), then the built-in forum
/// category above.
///
/// # Examples
///
/// ```sh
/// # Scrape the built-in category
/// discourse_topics
///
/// # Another forum, first 25 topics, results under ./out
/// discourse_topics --base-url https://meta.discourse.org --category /c/support/6 -n 25 -o ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the forum: scheme and host, no trailing slash
    #[arg(long, default_value = DEFAULT_FORUM_URL, value_parser = parse_base_url)]
    pub base_url: String,

    /// Category path appended to the base URL
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of topics to keep
    #[arg(short = 'n', long, value_parser = parse_max_topics)]
    pub max_topics: Option<usize>,

    /// Directory the timestamped JSON file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Optional path to a YAML scraper config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over the config file (if one was loaded) into the
    /// configuration the scraper runs with.
    pub fn scraper_config(&self, from_file: Option<ScraperConfig>) -> ScraperConfig {
        let had_file = from_file.is_some();
        let mut config = from_file.unwrap_or_default();

        match &self.category {
            Some(category) => config.category_path = category.clone(),
            None if !had_file => config.category_path = DEFAULT_FORUM_CATEGORY.to_string(),
            None => {}
        }
        if let Some(max_topics) = self.max_topics {
            config.max_topics = max_topics;
        }
        config
    }
}

/// Accept only absolute http(s) URLs with a host. The string is kept as typed.
fn parse_base_url(raw: &str) -> Result<String, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid URL `{raw}`: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", parsed.scheme()));
    }
    if parsed.host_str().is_none() {
        return Err(format!("URL `{raw}` has no host"));
    }
    Ok(raw.to_string())
}

fn parse_max_topics(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["discourse_topics"]);

        assert_eq!(cli.base_url, DEFAULT_FORUM_URL);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.category.is_none());
        assert!(cli.config.is_none());

        let config = cli.scraper_config(None);
        assert_eq!(config.category_path, DEFAULT_FORUM_CATEGORY);
        assert_eq!(config.max_topics, 10);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "discourse_topics",
            "-n",
            "3",
            "-o",
            "/tmp/topics",
            "-c",
            "/etc/scraper.yaml",
        ]);

        assert_eq!(cli.max_topics, Some(3));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/topics"));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/scraper.yaml")));
    }

    #[test]
    fn test_flags_override_config_file() {
        let cli = Cli::parse_from([
            "discourse_topics",
            "--category",
            "/c/general/4",
            "--max-topics",
            "7",
        ]);
        let file = ScraperConfig {
            category_path: "/c/from-file/9".to_string(),
            max_topics: 30,
            ..ScraperConfig::default()
        };

        let config = cli.scraper_config(Some(file));
        assert_eq!(config.category_path, "/c/general/4");
        assert_eq!(config.max_topics, 7);
    }

    #[test]
    fn test_config_file_category_used_without_flag() {
        let cli = Cli::parse_from(["discourse_topics"]);
        let file = ScraperConfig {
            category_path: "/c/from-file/9".to_string(),
            ..ScraperConfig::default()
        };

        assert_eq!(cli.scraper_config(Some(file)).category_path, "/c/from-file/9");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(Cli::try_parse_from(["discourse_topics", "--base-url", "not a url"]).is_err());
        assert!(
            Cli::try_parse_from(["discourse_topics", "--base-url", "ftp://forum.example.com"])
                .is_err()
        );
    }

    #[test]
    fn test_base_url_kept_verbatim() {
        let cli = Cli::parse_from(["discourse_topics", "--base-url", "https://forum.example.com"]);
        assert_eq!(cli.base_url, "https://forum.example.com");
    }

    #[test]
    fn test_rejects_zero_max_topics() {
        assert!(Cli::try_parse_from(["discourse_topics", "-n", "0"]).is_err());
    }
}
