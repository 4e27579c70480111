//! JSON copy of the daily note for API consumers of the published site.
//!
//! Holds the same articles as the markdown note plus the sentiment verdict of
//! each one:
//!
//! ```text
//! json_output_dir/
//! └── nota_20261018.json
//! ```

use crate::models::Note;
use crate::utils::note_filename;
use chrono::NaiveDate;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `note` to `<json_output_dir>/nota_<YYYYMMDD>.json`.
///
/// # Arguments
///
/// * `note` - The note to serialize, sentiment verdicts included
/// * `date` - Publication date, used for the file name
/// * `json_output_dir` - Directory for JSON output, created when missing
///
/// # Returns
///
/// The path of the written file, or an error if serialization, directory
/// creation or writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_note_json(
    note: &Note,
    date: NaiveDate,
    json_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(note)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = json_output_dir.join(note_filename(date, "json"));
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = note.articles.len(), "Wrote JSON note");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommentedArticle, SentimentLabel, SentimentResult};

    #[tokio::test]
    async fn test_write_note_json() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("api");
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let note = Note {
            local_date: "2026-10-18".to_string(),
            articles: vec![CommentedArticle {
                title: "Ley X aprobada".to_string(),
                summary: "El Senado aprobó...".to_string(),
                sentiment: SentimentResult {
                    label: SentimentLabel::Positive,
                    score: 0.75,
                },
                commentary: "Una luz de esperanza".to_string(),
            }],
        };

        let path = write_note_json(&note, date, &dir).await.unwrap();
        assert_eq!(path, dir.join("nota_20261018.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: Note = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.local_date, "2026-10-18");
        assert_eq!(back.articles, note.articles);
    }
}
