//! Markdown rendering and writing of the daily note.
//!
//! The rendered layout is what the static site publishes, so it is kept
//! byte-stable:
//!
//! ```text
//! # Diario Crítico - 2026-10-18
//!
//! ## Reflexiones del Día
//!
//! ### <title>
//!
//! **Resumen**: <summary>
//!
//! **Reflexión**: <commentary>
//!
//!
//! ---
//! Este diario es para vos, ...
//! Apoyanos en Cafecito: [Dona aquí](https://cafecito.app/diariocritico)
//! ```

use crate::models::Note;
use crate::utils::note_filename;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const SECTION_HEADING: &str = "## Reflexiones del Día";

pub const FOOTER: &str = "\n---\nEste diario es para vos, para que no te calles. ¡Comparte y despertemos juntos!\nApoyanos en Cafecito: [Dona aquí](https://cafecito.app/diariocritico)";

/// Render a [`Note`] to markdown, keeping article order.
///
/// Titles and summaries are written verbatim; repeated articles are not
/// collapsed.
pub fn note_to_markdown(note: &Note) -> String {
    let mut md = String::new();
    writeln!(md, "# Diario Crítico - {}\n", note.local_date).unwrap();
    writeln!(md, "{SECTION_HEADING}\n").unwrap();

    for article in &note.articles {
        writeln!(md, "### {}\n", article.title).unwrap();
        writeln!(md, "**Resumen**: {}\n", article.summary).unwrap();
        writeln!(md, "**Reflexión**: {}\n", article.commentary).unwrap();
    }

    md.push_str(FOOTER);
    md
}

/// Write the note to `<output_dir>/nota_<YYYYMMDD>.md`.
///
/// Creates `output_dir` when missing and replaces any note already written
/// for the same date.
///
/// # Arguments
///
/// * `output_dir` - Directory receiving the note
/// * `date` - Publication date, used for the file name
/// * `markdown` - Rendered note, written byte-for-byte
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Any filesystem error (directory creation, permissions, disk full). The
/// pipeline treats it as fatal.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), %date))]
pub async fn write_note(
    output_dir: &Path,
    date: NaiveDate,
    markdown: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(note_filename(date, "md"));
    fs::write(&path, markdown).await?;
    info!(path = %path.display(), bytes = markdown.len(), "Nota guardada");
    Ok(path)
}
