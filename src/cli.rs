//! Command-line interface definitions for Diario Crítico.
//!
//! Every argument is optional: with no flags the built-in configuration is
//! used. Flags override the values loaded from `--config`.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for Diario Crítico.
///
/// # Examples
///
/// ```sh
/// # Built-in sources, writes ./docs/nota_YYYYMMDD.md
/// diario_critico
///
/// # Custom configuration and a remote sentiment model
/// diario_critico -c diario.yaml --classifier-endpoint http://localhost:8080/classify
///
/// # Scrape a single page into another directory
/// diario_critico -s https://example.com/politica -o public
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for the markdown note
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Source page to scrape; repeat to scrape several (replaces configured sources)
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Output directory for the JSON copy of the note
    #[arg(short, long, env = "DIARIO_JSON_OUTPUT_DIR")]
    pub json_output_dir: Option<PathBuf>,

    /// Text-classification endpoint (e.g. a server hosting distilbert SST-2).
    /// Without it, summaries are labeled by a built-in word-list heuristic,
    /// not by a pretrained model
    #[arg(long, env = "DIARIO_CLASSIFIER_ENDPOINT")]
    pub classifier_endpoint: Option<String>,

    /// Bearer token for the classification endpoint
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub classifier_token: Option<String>,

    /// Maintain index.md in the output directory
    #[arg(long)]
    pub update_index: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }
        if let Some(dir) = &self.json_output_dir {
            config.json_output_dir = Some(dir.clone());
        }
        if let Some(endpoint) = &self.classifier_endpoint {
            config.classifier.endpoint = Some(endpoint.clone());
        }
        if let Some(token) = &self.classifier_token {
            config.classifier.api_token = Some(token.clone());
        }
        if self.update_index {
            config.update_index = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["diario_critico"]);

        assert!(cli.config.is_none());
        assert!(cli.output_dir.is_none());
        assert!(cli.sources.is_empty());
        assert!(!cli.update_index);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "diario_critico",
            "-c",
            "/tmp/diario.yaml",
            "-o",
            "/tmp/docs",
            "-s",
            "https://a.example/",
            "-s",
            "https://b.example/",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/diario.yaml")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/docs")));
        assert_eq!(cli.sources, vec!["https://a.example/", "https://b.example/"]);
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from([
            "diario_critico",
            "--output-dir",
            "public",
            "--source",
            "https://a.example/",
            "--classifier-endpoint",
            "http://localhost:8080/classify",
            "--update-index",
        ]);

        let config = cli.apply(Config::default());
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.sources, vec!["https://a.example/".to_string()]);
        assert_eq!(
            config.classifier.endpoint.as_deref(),
            Some("http://localhost:8080/classify")
        );
        assert!(config.update_index);
        assert_eq!(config.max_headlines, 5);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let cli = Cli::parse_from(["diario_critico"]);
        let config = Config {
            update_index: true,
            ..Config::default()
        };
        let applied = cli.apply(config.clone());
        // env-backed flags may be set by the caller's shell
        assert_eq!(applied.sources, config.sources);
        assert_eq!(applied.output_dir, config.output_dir);
        assert!(applied.update_index);
    }

    #[test]
    fn test_classifier_endpoint_help_names_heuristic_default() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "classifier_endpoint")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();

        assert!(help.contains("heuristic"), "{help}");
        assert!(help.contains("not by a pretrained model"), "{help}");
    }
}
