//! One end-to-end run: scrape, classify, comment, compose, write.
//!
//! Failures of a single source stay local to it. Once scraping is over, every
//! remaining step works on the whole note, so a classifier or filesystem
//! failure aborts the run before anything partial is written.

use crate::commentary::Commentator;
use crate::config::Config;
use crate::models::{Article, CommentedArticle, Note};
use crate::outputs::{indexes, json, markdown};
use crate::scrapers::headlines::{HeadlineExtractor, build_client, scrape_sources};
use crate::sentiment::{ClassifierError, SentimentClassifier};
use crate::utils::{iso_date, truncate_for_log};
use chrono::NaiveDate;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};

/// What a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Path of the markdown note, `None` when no article was found.
    pub note_path: Option<PathBuf>,
    pub articles: usize,
    pub failed_sources: usize,
}

/// Classify every article and attach its commentary, keeping order.
#[instrument(level = "info", skip_all, fields(articles = articles.len(), classifier = classifier.name()))]
pub async fn build_note<C: SentimentClassifier>(
    articles: Vec<Article>,
    classifier: &C,
    commentator: &Commentator,
    date: NaiveDate,
) -> Result<Note, ClassifierError> {
    let mut commented = Vec::with_capacity(articles.len());
    for (i, article) in articles.into_iter().enumerate() {
        let sentiment = classifier.classify(&article.summary).await?;
        let commentary = commentator.comment(&article.summary, sentiment.label);
        debug!(
            index = i,
            title = %truncate_for_log(&article.title, 80),
            label = %sentiment.label,
            score = sentiment.score,
            "Commented article"
        );
        commented.push(CommentedArticle {
            title: article.title,
            summary: article.summary,
            sentiment,
            commentary,
        });
    }

    Ok(Note {
        local_date: iso_date(date),
        articles: commented,
    })
}

/// Run the whole pipeline for `date`.
///
/// Returns without writing anything when no source yielded an article.
#[instrument(level = "info", skip_all, fields(%date, sources = config.sources.len()))]
pub async fn run<C: SentimentClassifier>(
    config: &Config,
    classifier: &C,
    date: NaiveDate,
) -> Result<RunReport, Box<dyn Error>> {
    let client = build_client(&config.user_agent)?;
    let extractor = HeadlineExtractor::from_config(config)?;
    let commentator = Commentator::from_config(config);

    let outcome = scrape_sources(
        &client,
        &extractor,
        &config.sources,
        config.fetch_concurrency,
    )
    .await;
    let failed_sources = outcome.failed_sources.len();

    if outcome.articles.is_empty() {
        info!(failed_sources, "No se encontraron artículos para procesar.");
        return Ok(RunReport {
            note_path: None,
            articles: 0,
            failed_sources,
        });
    }

    let note = build_note(outcome.articles, classifier, &commentator, date).await?;
    let md = markdown::note_to_markdown(&note);
    let note_path = markdown::write_note(&config.output_dir, date, &md).await?;

    // Secondary outputs; the markdown note is already on disk.
    if let Some(json_dir) = &config.json_output_dir {
        if let Err(e) = json::write_note_json(&note, date, json_dir).await {
            error!(error = %e, "Failed to write JSON note");
        }
    }
    if config.update_index {
        if let Err(e) = indexes::update_notes_index(&config.output_dir, date).await {
            error!(error = %e, "Failed to update notes index");
        }
    }

    Ok(RunReport {
        note_path: Some(note_path),
        articles: note.articles.len(),
        failed_sources,
    })
}
