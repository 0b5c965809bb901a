//! JSON output for scraped topics.
//!
//! Each run writes one file named after the UTC time it finished:
//!
//! ```text
//! output_dir/
//! └── discourse_topics_20250506_143000.json
//! ```
//!
//! The file holds a pretty-printed array of [`TopicRecord`]s. A run that
//! found nothing still writes `[]`.

use crate::error::OutputError;
use crate::models::TopicRecord;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// File name for a run that finished at `now`.
pub fn output_filename(now: DateTime<Utc>) -> String {
    format!("discourse_topics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Write `topics` to a timestamp-named JSON file under `output_dir`.
///
/// Creates `output_dir` if needed and returns the path written.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_topics(
    topics: &[TopicRecord],
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, OutputError> {
    let json = serde_json::to_string_pretty(topics)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = output_dir.join(output_filename(now));
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = topics.len(), "Wrote topics JSON");

    Ok(path)
}
