//! Headline scraper for plain news and transparency pages.
//!
//! Each source page is fetched once and searched for heading elements. Every
//! heading is paired with the nearest paragraph that follows it in document
//! order. The search is flat: it does not stay inside the heading's container,
//! so irregular pages can pair a paragraph with the wrong heading or give the
//! same paragraph to several headings.

use crate::config::Config;
use crate::models::Article;
use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid CSS selector `{0}`")]
    Selector(String),
}

/// Articles gathered from every source plus the sources that failed.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Source order, then document order within each source.
    pub articles: Vec<Article>,
    pub failed_sources: Vec<String>,
}

/// Build the HTTP client shared by every page fetch.
pub fn build_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(user_agent).build()
}

/// Pulls `(title, summary)` pairs out of a page.
#[derive(Debug, Clone)]
pub struct HeadlineExtractor {
    heading: Selector,
    summary: Selector,
    candidates: Selector,
    max_headlines: usize,
    missing_summary: String,
}

impl HeadlineExtractor {
    pub fn new(
        heading_selector: &str,
        summary_selector: &str,
        max_headlines: usize,
        missing_summary: impl Into<String>,
    ) -> Result<Self, ScrapeError> {
        let parse = |s: &str| Selector::parse(s).map_err(|_| ScrapeError::Selector(s.to_string()));
        Ok(Self {
            heading: parse(heading_selector)?,
            summary: parse(summary_selector)?,
            candidates: parse(format!("{heading_selector}, {summary_selector}").as_str())?,
            max_headlines,
            missing_summary: missing_summary.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        Self::new(
            &config.heading_selector,
            &config.summary_selector,
            config.max_headlines,
            config.missing_summary.clone(),
        )
    }

    /// Extract at most `max_headlines` articles in document order.
    ///
    /// # Arguments
    ///
    /// * `html` - Raw markup of a source page
    ///
    /// # Returns
    ///
    /// One [`Article`] per heading, up to the limit. The title is the trimmed
    /// heading text; the summary is the trimmed text of the next paragraph in
    /// document order, or the placeholder when none follows. Never fails:
    /// malformed markup is parsed leniently and yields whatever headings are
    /// found.
    pub fn extract(&self, html: &str) -> Vec<Article> {
        let document = Html::parse_document(html);
        // Headings and paragraphs interleaved in document order; an element's
        // descendants come after it.
        let nodes: Vec<ElementRef> = document.select(&self.candidates).collect();

        let mut articles = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            if articles.len() >= self.max_headlines {
                break;
            }
            if !self.heading.matches(node) {
                continue;
            }
            let summary = nodes[i + 1..]
                .iter()
                .find(|candidate| self.summary.matches(candidate))
                .map(|paragraph| element_text(paragraph))
                .unwrap_or_else(|| self.missing_summary.clone());
            articles.push(Article {
                title: element_text(node),
                summary,
            });
        }
        articles
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Fetch one page.
///
/// # Arguments
///
/// * `client` - Shared client carrying the configured user agent
/// * `url` - Page to fetch
///
/// # Returns
///
/// The response body as text.
///
/// # Errors
///
/// [`ScrapeError::Request`] on transport failures and
/// [`ScrapeError::Status`] on any non-2xx answer. No retry is attempted.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Request {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), %status, "Fetched page");
    Ok(body)
}

/// Fetch a single source and extract its headlines.
#[instrument(level = "info", skip(client, extractor))]
pub async fn scrape_source(
    client: &Client,
    extractor: &HeadlineExtractor,
    url: &str,
) -> Result<Vec<Article>, ScrapeError> {
    let html = fetch_page(client, url).await?;
    let articles = extractor.extract(&html);
    info!(count = articles.len(), "Extracted headlines");
    Ok(articles)
}

/// Scrape every source, keeping source order in the flattened result.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `extractor` - Headline extractor applied to every page
/// * `sources` - Source URLs, in output order
/// * `concurrency` - Sources in flight at once (values below 1 act as 1)
///
/// # Returns
///
/// A [`ScrapeOutcome`] with the articles of every source that succeeded and
/// the URLs of those that failed. A failing source is logged at `error` level
/// and contributes no articles; results are yielded in source order
/// regardless of completion order.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), concurrency = concurrency))]
pub async fn scrape_sources(
    client: &Client,
    extractor: &HeadlineExtractor,
    sources: &[String],
    concurrency: usize,
) -> ScrapeOutcome {
    let results: Vec<(&String, Result<Vec<Article>, ScrapeError>)> = stream::iter(sources)
        .map(|url| async move { (url, scrape_source(client, extractor, url).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = ScrapeOutcome::default();
    for (url, result) in results {
        match result {
            Ok(articles) => outcome.articles.extend(articles),
            Err(e) => {
                error!(%url, error = %e, "Failed to scrape source");
                outcome.failed_sources.push(url.clone());
            }
        }
    }

    info!(
        articles = outcome.articles.len(),
        failed = outcome.failed_sources.len(),
        "Scraped all sources"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MISSING_SUMMARY;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn extractor() -> HeadlineExtractor {
        HeadlineExtractor::new("h3", "p", 5, DEFAULT_MISSING_SUMMARY).unwrap()
    }

    fn headings(n: usize) -> String {
        let mut html = String::from("<html><body>");
        for i in 0..n {
            html.push_str(&format!("<h3> Titular {i} </h3><p> Resumen {i} </p>"));
        }
        html.push_str("</body></html>");
        html
    }

    #[test]
    fn test_extract_fewer_than_limit() {
        let articles = extractor().extract(&headings(3));
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "Titular 0");
        assert_eq!(articles[2].summary, "Resumen 2");
    }

    #[test]
    fn test_extract_caps_at_limit_in_document_order() {
        let articles = extractor().extract(&headings(8));
        assert_eq!(articles.len(), 5);
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Titular 0", "Titular 1", "Titular 2", "Titular 3", "Titular 4"]
        );
    }

    #[test]
    fn test_extract_no_headings() {
        let html = "<html><body><h2>Otro</h2><p>Texto</p></body></html>";
        assert!(extractor().extract(html).is_empty());
    }

    #[test]
    fn test_missing_paragraph_uses_placeholder() {
        let html = "<p>Antes</p><h3>Sin nada</h3><div>suelto</div>";
        let articles = extractor().extract(html);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].summary, "Sin resumen disponible.");
    }

    #[test]
    fn test_paragraph_search_is_flat() {
        // The paragraph lives in another container and is shared by both headings.
        let html = r#"
            <section><h3>Uno</h3></section>
            <section><h3>Dos</h3></section>
            <article><div><p>Compartido</p></div></article>
        "#;
        let articles = extractor().extract(html);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].summary, "Compartido");
        assert_eq!(articles[1].summary, "Compartido");
    }

    #[test]
    fn test_nested_text_is_concatenated_and_trimmed() {
        let html = "<h3>\n  <a href=\"/x\">Ley <b>X</b> aprobada</a>\n</h3><p>  El Senado aprobó...  </p>";
        let articles = extractor().extract(html);
        assert_eq!(articles[0].title, "Ley X aprobada");
        assert_eq!(articles[0].summary, "El Senado aprobó...");
    }

    #[test]
    fn test_invalid_selector() {
        let err = HeadlineExtractor::new("h3[", "p", 5, "x").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector(_)));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/politica"))
            .and(header("user-agent", "diario-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h3>Hola</h3>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client("diario-test/1.0").unwrap();
        let body = fetch_page(&client, &format!("{}/politica", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<h3>Hola</h3>");
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_client("diario-test/1.0").unwrap();
        let err = fetch_page(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status, .. } if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_scrape_sources_keeps_order_and_skips_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200).set_body_string(headings(2)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/c"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<h3>Último</h3><p>Fin</p>")
                    .set_delay(std::time::Duration::from_millis(50)),
            )
            .mount(&server)
            .await;

        let sources = vec![
            format!("{}/c", server.uri()),
            format!("{}/b", server.uri()),
            format!("{}/a", server.uri()),
        ];
        let client = build_client("diario-test/1.0").unwrap();
        let outcome = scrape_sources(&client, &extractor(), &sources, 3).await;

        let titles: Vec<_> = outcome.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Último", "Titular 0", "Titular 1"]);
        assert_eq!(outcome.failed_sources, vec![format!("{}/b", server.uri())]);
    }
}
