//! Run configuration.
//!
//! Every value has a built-in default, so the program runs without any
//! configuration file. A YAML file passed with `--config` may override any
//! subset of keys; omitted keys keep their defaults. CLI flags are applied on
//! top of the file by [`crate::cli::Cli::apply`].
//!
//! ```yaml
//! sources:
//!   - https://www.argentina.gob.ar/transparencia
//! output_dir: docs
//! max_headlines: 5
//! classifier:
//!   endpoint: http://localhost:8080/models/distilbert-sst2
//! ```

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_MISSING_SUMMARY: &str = "Sin resumen disponible.";

pub const DEFAULT_NEGATIVE_TEMPLATE: &str = "Esto es indignante: {excerpt}... ¿Cómo es posible que sigamos tolerando esta opacidad? Es hora de exigir respuestas claras y que los corruptos rindan cuentas.";

pub const DEFAULT_POSITIVE_TEMPLATE: &str = "Una luz de esperanza: {excerpt}... Pero, ¿es suficiente? Reflexionemos: ¿qué falta para que esto realmente cambie la vida de nuestra provincia?";

/// Placeholder substituted by the summary excerpt in both templates.
pub const EXCERPT_PLACEHOLDER: &str = "{excerpt}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("source `{0}` is not an absolute http(s) URL")]
    InvalidSource(String),
    #[error("invalid CSS selector `{0}`")]
    InvalidSelector(String),
    #[error("{0} must be at least 1")]
    NotPositive(&'static str),
}

/// Sentiment backend settings.
///
/// Without an `endpoint` the built-in lexicon classifier is used. That is a
/// word-list heuristic, not a pretrained model; point `endpoint` at a server
/// hosting a real model to reproduce model labels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Text-classification endpoint speaking the Hugging Face inference format.
    pub endpoint: Option<String>,
    /// Bearer token sent to `endpoint`.
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Pages scraped for headlines, in output order.
    pub sources: Vec<String>,
    /// Directory receiving `nota_<YYYYMMDD>.md`.
    pub output_dir: PathBuf,
    /// `User-Agent` header sent with every page fetch.
    pub user_agent: String,
    pub heading_selector: String,
    pub summary_selector: String,
    /// Headings kept per source.
    pub max_headlines: usize,
    /// Characters of the summary quoted in the commentary.
    pub excerpt_chars: usize,
    pub missing_summary: String,
    pub negative_template: String,
    pub positive_template: String,
    /// Sources fetched at once. `1` fetches strictly one after another.
    pub fetch_concurrency: usize,
    pub classifier: ClassifierConfig,
    /// When set, a JSON copy of the note is written here.
    pub json_output_dir: Option<PathBuf>,
    /// Maintain `index.md` next to the notes.
    pub update_index: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![
                "https://www.argentina.gob.ar/transparencia".to_string(),
                "https://www.lanacion.com.ar/politica/".to_string(),
            ],
            output_dir: PathBuf::from("docs"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            heading_selector: "h3".to_string(),
            summary_selector: "p".to_string(),
            max_headlines: 5,
            excerpt_chars: 100,
            missing_summary: DEFAULT_MISSING_SUMMARY.to_string(),
            negative_template: DEFAULT_NEGATIVE_TEMPLATE.to_string(),
            positive_template: DEFAULT_POSITIVE_TEMPLATE.to_string(),
            fetch_concurrency: 1,
            classifier: ClassifierConfig::default(),
            json_output_dir: None,
            update_index: false,
        }
    }
}

impl Config {
    /// Load a YAML configuration file. Missing keys take their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(sources = config.sources.len(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Reject values the pipeline cannot run with, before any network I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for source in &self.sources {
            match Url::parse(source) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => return Err(ConfigError::InvalidSource(source.clone())),
            }
        }
        for selector in [&self.heading_selector, &self.summary_selector] {
            if Selector::parse(selector).is_err() {
                return Err(ConfigError::InvalidSelector(selector.clone()));
            }
        }
        if self.max_headlines == 0 {
            return Err(ConfigError::NotPositive("max_headlines"));
        }
        if self.fetch_concurrency == 0 {
            return Err(ConfigError::NotPositive("fetch_concurrency"));
        }
        Ok(())
    }
}
