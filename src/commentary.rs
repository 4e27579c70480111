//! Template-based commentary.
//!
//! Two fixed paragraphs, one per sentiment label, each quoting the start of
//! the article summary. No randomness: the output depends only on the summary
//! and the label.

use crate::config::{Config, EXCERPT_PLACEHOLDER};
use crate::models::SentimentLabel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentator {
    negative_template: String,
    positive_template: String,
    excerpt_chars: usize,
}

impl Commentator {
    pub fn new(
        negative_template: impl Into<String>,
        positive_template: impl Into<String>,
        excerpt_chars: usize,
    ) -> Self {
        Self {
            negative_template: negative_template.into(),
            positive_template: positive_template.into(),
            excerpt_chars,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.negative_template.clone(),
            config.positive_template.clone(),
            config.excerpt_chars,
        )
    }

    /// Fill the template matching `label` with an excerpt of `summary`.
    pub fn comment(&self, summary: &str, label: SentimentLabel) -> String {
        let template = match label {
            SentimentLabel::Negative => &self.negative_template,
            SentimentLabel::Positive => &self.positive_template,
        };
        template.replace(EXCERPT_PLACEHOLDER, &excerpt(summary, self.excerpt_chars))
    }
}

/// First `max_chars` characters of `text`; may cut a word in half.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
