//! Data models shared by the scraping, classification and output stages.
//!
//! - [`Article`]: a headline and its summary as scraped from a source
//! - [`SentimentResult`]: the classifier verdict for one summary
//! - [`CommentedArticle`]: an article with its verdict and commentary attached
//! - [`Note`]: everything published for one calendar day

use serde::{Deserialize, Serialize};
use std::fmt;

/// A headline scraped from one source page.
///
/// Articles carry no identity beyond their position in the run's ordered
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// Trimmed text of the heading element.
    pub title: String,
    /// Trimmed text of the paragraph following the heading, or the
    /// configured placeholder.
    pub summary: String,
}

/// Coarse polarity returned by a sentiment classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "POSITIVE"),
            SentimentLabel::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// Best label for a text together with the classifier's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

/// An [`Article`] after it went through the classifier and the commentator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CommentedArticle {
    pub title: String,
    pub summary: String,
    pub sentiment: SentimentResult,
    pub commentary: String,
}

/// The note published for a single day.
///
/// Serialized as-is by the JSON companion output; rendered to markdown by
/// [`crate::outputs::markdown::note_to_markdown`].
#[derive(Debug, Deserialize, Serialize)]
pub struct Note {
    /// The date of publication in `YYYY-MM-DD` format.
    pub local_date: String,
    /// Articles in source order, then extraction order.
    pub articles: Vec<CommentedArticle>,
}
