//! Remote text-classification model.
//!
//! Talks to an endpoint using the Hugging Face inference wire format, such as
//! a local server hosting `distilbert-base-uncased-finetuned-sst-2-english`:
//!
//! ```text
//! POST <endpoint>   {"inputs": "<text>"}
//! 200               [[{"label": "NEGATIVE", "score": 0.998}, {"label": "POSITIVE", "score": 0.002}]]
//! ```
//!
//! Some servers return the flat `[{"label": ..., "score": ...}]` form; both
//! are accepted.

use super::{ClassifierError, SentimentClassifier};
use crate::models::{SentimentLabel, SentimentResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifyResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            ClassifyResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            ClassifyResponse::Flat(scores) => scores,
        }
    }
}

/// Map a model label onto [`SentimentLabel`].
///
/// Only negative labels (`NEGATIVE`, `neg`, `LABEL_0`) select the negative
/// template; every other label, including `NEUTRAL` from three-class models,
/// counts as positive.
fn parse_label(raw: &str) -> SentimentLabel {
    let upper = raw.to_uppercase();
    if upper.starts_with("NEG") || upper == "LABEL_0" {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Positive
    }
}

/// Classifier backed by a remote text-classification endpoint.
///
/// The bearer token, when present, is sent with every request and redacted
/// from `Debug` output.
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpClassifier {
    /// Create a classifier for `endpoint`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL receiving `POST {"inputs": "<text>"}`
    /// * `api_token` - Optional bearer token (e.g. a Hugging Face API token)
    ///
    /// # Returns
    ///
    /// The classifier, or [`ClassifierError::Request`] if the HTTP client
    /// cannot be built.
    pub fn new(endpoint: String, api_token: Option<String>) -> Result<Self, ClassifierError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
            api_token,
        })
    }
}

impl fmt::Debug for HttpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClassifier")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SentimentClassifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(level = "debug", skip_all, fields(endpoint = %self.endpoint))]
    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let t0 = Instant::now();
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, "Classifier call failed");
            return Err(ClassifierError::Status(status));
        }

        let best = response
            .json::<ClassifyResponse>()
            .await?
            .into_scores()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(ClassifierError::Empty)?;

        let label = parse_label(&best.label);
        debug!(%label, score = best.score, elapsed_ms = t0.elapsed().as_millis() as u64, "Classified text");
        Ok(SentimentResult {
            label,
            score: best.score,
        })
    }
}
