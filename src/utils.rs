//! Small helpers for date stamps, file naming and log output.

use chrono::NaiveDate;

/// Format a date as `YYYY-MM-DD`, as shown in the note title and stored in
/// [`crate::models::Note::local_date`].
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date as `YYYYMMDD`, as used in note file names.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Build the file name of a dated note.
///
/// # Arguments
///
/// * `date` - Publication date
/// * `extension` - File extension without the dot (`md`, `json`)
///
/// # Returns
///
/// `nota_<YYYYMMDD>.<extension>`, e.g. `nota_20261018.md`. Two runs on the
/// same date produce the same name, so the later one overwrites.
///
/// # Examples
///
/// ```ignore
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(note_filename(date, "md"), "nota_20261018.md");
/// ```
pub fn note_filename(date: NaiveDate, extension: &str) -> String {
    format!("nota_{}.{}", compact_date(date), extension)
}

/// Truncate a string for logging purposes.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The original string if it has at most `max` characters, otherwise its
/// first `max` characters followed by `"…(+N bytes)"`. The cut always falls
/// on a character boundary.
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(iso_date(date()), "2026-03-07");
        assert_eq!(compact_date(date()), "20260307");
    }

    #[test]
    fn test_note_filename() {
        assert_eq!(note_filename(date(), "md"), "nota_20260307.md");
        assert_eq!(note_filename(date(), "json"), "nota_20260307.json");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hola, mundo", 100), "Hola, mundo");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("ñandú", 2);
        assert_eq!(result, "ña…(+4 bytes)");
    }
}
