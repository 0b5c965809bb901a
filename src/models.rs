//! Data model for scraped forum topics.
//!
//! [`TopicRecord`] is the only entity: one per topic link found on a category
//! page. Records are built during a single extraction pass and handed to the
//! caller; nothing mutates them afterwards.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single topic listed on a Discourse category page.
///
/// # JSON Shape
///
/// ```text
/// { "title": "...", "url": "https://...", "scraped_at": "2025-05-06T14:30:00.123456+00:00" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Topic title with surrounding whitespace removed.
    pub title: String,
    /// Absolute topic URL, or the raw `href` when it was not root-relative.
    pub url: String,
    /// When the record was extracted, in UTC.
    #[serde(with = "iso8601_utc")]
    pub scraped_at: DateTime<Utc>,
}

impl TopicRecord {
    /// Build a record. `scraped_at` is truncated to microseconds so the
    /// serialized form round-trips exactly.
    pub fn new(title: impl Into<String>, url: impl Into<String>, scraped_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            scraped_at: scraped_at.trunc_subsecs(6),
        }
    }
}

/// `DateTime<Utc>` as an RFC 3339 string with microseconds and a `+00:00` offset.
mod iso8601_utc {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
