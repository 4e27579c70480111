//! Sentiment classification backends.
//!
//! The pipeline only needs one capability: label a text as positive or
//! negative with a confidence score. [`SentimentClassifier`] captures that, and
//! [`Classifier`] selects between the shipped backends at startup:
//!
//! - [`lexicon::LexiconClassifier`]: built-in polarity word lists, no network
//! - [`http::HttpClassifier`]: a remote text-classification model speaking the
//!   Hugging Face inference format
//!
//! A classifier is built once per process and borrowed by every article.

pub mod http;
pub mod lexicon;

use crate::config::ClassifierConfig;
use crate::models::SentimentResult;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classification request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("classifier answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("classifier returned no labels")]
    Empty,
}

/// Trait for anything able to label a text.
///
/// Implementations must be deterministic for a fixed model.
pub trait SentimentClassifier {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Return the single best label for `text`.
    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError>;
}

/// The classifier selected by configuration.
#[derive(Debug)]
pub enum Classifier {
    Lexicon(lexicon::LexiconClassifier),
    Http(http::HttpClassifier),
}

impl Classifier {
    /// Build the configured backend. Without an endpoint the lexicon is used.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let classifier = match &config.endpoint {
            Some(endpoint) => Classifier::Http(http::HttpClassifier::new(
                endpoint.clone(),
                config.api_token.clone(),
            )?),
            None => Classifier::Lexicon(lexicon::LexiconClassifier::new()),
        };
        info!(backend = classifier.name(), "Sentiment classifier ready");
        Ok(classifier)
    }
}

impl SentimentClassifier for Classifier {
    fn name(&self) -> &str {
        match self {
            Classifier::Lexicon(c) => c.name(),
            Classifier::Http(c) => c.name(),
        }
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        match self {
            Classifier::Lexicon(c) => c.classify(text).await,
            Classifier::Http(c) => c.classify(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    #[test]
    fn test_default_config_selects_lexicon() {
        let classifier = Classifier::from_config(&ClassifierConfig::default()).unwrap();
        assert!(matches!(classifier, Classifier::Lexicon(_)));
        assert_eq!(classifier.name(), "lexicon");
    }

    #[test]
    fn test_endpoint_selects_http() {
        let config = ClassifierConfig {
            endpoint: Some("http://localhost:8080/classify".to_string()),
            api_token: None,
        };
        let classifier = Classifier::from_config(&config).unwrap();
        assert!(matches!(classifier, Classifier::Http(_)));
        assert_eq!(classifier.name(), "http");
    }

    #[tokio::test]
    async fn test_dispatch_reaches_backend() {
        let classifier = Classifier::from_config(&ClassifierConfig::default()).unwrap();
        let result = classifier
            .classify("Denuncian corrupción y fraude en el ministerio")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
    }
}
