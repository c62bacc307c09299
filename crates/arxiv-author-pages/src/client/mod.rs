//! arXiv API client.
//!
//! Provides an async HTTP client that:
//! - Builds id and author queries (see [`query`])
//! - Decodes the Atom response into raw entries (see [`feed`])
//! - Normalizes entries into [`PaperRecord`]s in feed order
//!
//! Requests are issued one at a time. There is no retry, rate limiting or caching.

pub mod feed;
pub mod query;

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult, Result};
use crate::models::{PaperRecord, RawEntry, parse_paper_entry};

pub use query::{build_author_query, build_id_query};

/// arXiv API client.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Query endpoint URL.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: config.api_url.clone() })
    }

    /// Query endpoint this client targets.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch `query` and return the feed's entries (possibly none).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or an unreadable feed.
    pub async fn query_api(&self, query: &str) -> ClientResult<Vec<RawEntry>> {
        tracing::debug!(query, "Querying arXiv");

        let response = self.client.get(query).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        feed::parse_feed(&body)
    }

    /// Fetch an author's papers, newest first unless `extra_params` change the sort.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or any entry cannot be normalized.
    pub async fn get_author_papers(
        &self,
        author: &str,
        extra_params: &[(String, String)],
    ) -> Result<Vec<PaperRecord>> {
        tracing::info!(author, "Getting papers from arXiv API");

        let query = build_author_query(&self.api_url, author, extra_params);
        let entries = self.query_api(&query).await?;

        tracing::info!(author, count = entries.len(), "Retrieved author papers");
        normalize_entries(&entries)
    }

    /// Fetch papers by arXiv identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or any entry cannot be normalized.
    pub async fn get_papers_by_id(
        &self,
        ids: &[String],
        extra_params: &[(String, String)],
    ) -> Result<Vec<PaperRecord>> {
        let query = build_id_query(&self.api_url, ids, extra_params);
        let entries = self.query_api(&query).await?;

        tracing::info!(requested = ids.len(), count = entries.len(), "Retrieved papers by id");
        normalize_entries(&entries)
    }

    /// Map non-success statuses to errors.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::unexpected_status(status.as_u16(), text))
    }
}

fn normalize_entries(entries: &[RawEntry]) -> Result<Vec<PaperRecord>> {
    entries.iter().map(|entry| parse_paper_entry(entry).map_err(Into::into)).collect()
}
