//! Landing index for the published notes.
//!
//! `index.md` lives next to the notes and links every dated note, newest
//! first:
//!
//! ```text
//! # Diario Crítico
//!
//! - [2026-10-18](./nota_20261018.md)
//! - [2026-10-17](./nota_20261017.md)
//! ```
//!
//! Re-running on the same day leaves the index untouched.

use crate::utils::{iso_date, note_filename};
use chrono::NaiveDate;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

pub const INDEX_FILENAME: &str = "index.md";
const INDEX_HEADER: &str = "# Diario Crítico";

/// Add a note to `<output_dir>/index.md`, creating the file if needed.
///
/// # Arguments
///
/// * `output_dir` - Directory holding the notes and the index
/// * `date` - Date of the note to link
///
/// # Returns
///
/// The path of the index file.
///
/// # Structure
///
/// The new entry goes right below the `# Diario Crítico` header so the
/// newest note comes first. A date that is already listed is left alone.
/// Without a header the entry is appended at the end.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), %date))]
pub async fn update_notes_index(
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let index_path = output_dir.join(INDEX_FILENAME);
    let content = if fs::try_exists(&index_path).await? {
        fs::read_to_string(&index_path).await?
    } else {
        format!("{INDEX_HEADER}\n")
    };

    let entry = format!("- [{}](./{})", iso_date(date), note_filename(date, "md"));
    let mut lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();

    if lines.iter().any(|l| l.trim() == entry) {
        debug!("Note already indexed");
        return Ok(index_path);
    }

    match lines.iter().position(|l| l.starts_with(INDEX_HEADER)) {
        Some(pos) => {
            let mut insert_at = pos + 1;
            if lines.get(insert_at).is_none_or(|l| !l.trim().is_empty()) {
                lines.insert(insert_at, String::new());
            }
            insert_at += 1;
            lines.insert(insert_at, entry);
        }
        None => lines.push(entry),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    fs::write(&index_path, out).await?;
    info!(path = %index_path.display(), "Updated notes index");
    Ok(index_path)
}
