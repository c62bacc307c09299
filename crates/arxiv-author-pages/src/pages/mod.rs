//! Author page generation, persistence and listing.
//!
//! [`AuthorPages`] ties the arXiv client, the formatter and a
//! [`SummaryStore`] together. Pages are written once per
//! `(author, version, max_papers, max_years)` combination; see
//! [`author_page_filename`].

mod store;

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::PathBuf;

use regex::Regex;

use crate::client::ArxivClient;
use crate::config::{Config, defaults};
use crate::error::{Result, StoreError, StoreResult};
use crate::formatters;
use crate::models::{PaperRecord, SummaryFormat, SummarySource};

pub use store::{FsStore, MemoryStore, SummaryStore};

/// Options for rendering one author page.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Papers to render; fetched from arXiv when `None`.
    pub records: Option<Vec<PaperRecord>>,

    /// Biography; looked up in the author info file when `None`.
    pub bio: Option<String>,

    /// Maximum number of papers considered.
    pub max_papers: usize,

    /// Papers at least this many years old are skipped.
    pub max_years: f64,

    /// What each paper summary is built from.
    pub source: SummarySource,

    /// Page output format.
    pub format: SummaryFormat,
}

impl PageRequest {
    /// Use these records instead of fetching.
    #[must_use]
    pub fn with_records(mut self, records: Vec<PaperRecord>) -> Self {
        self.records = Some(records);
        self
    }

    /// Use this biography instead of loading it.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the paper cap.
    #[must_use]
    pub fn max_papers(mut self, max_papers: usize) -> Self {
        self.max_papers = max_papers;
        self
    }

    /// Set the age cutoff in years.
    #[must_use]
    pub fn max_years(mut self, max_years: f64) -> Self {
        self.max_years = max_years;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            records: None,
            bio: None,
            max_papers: defaults::MAX_PAPERS,
            max_years: defaults::MAX_YEARS,
            source: SummarySource::default(),
            format: SummaryFormat::default(),
        }
    }
}

/// File name for a written author page.
///
/// `Jane Doe`, version 2, 100 papers, 20 years gives
/// `jane_doe.markdown.v2.maxp100.maxy20.txt`.
#[must_use]
pub fn author_page_filename(
    author: &str,
    format: SummaryFormat,
    version: u32,
    max_papers: usize,
    max_years: f64,
) -> String {
    let author_str = author.to_lowercase().replace(' ', "_");
    format!("{author_str}.{}.v{version}.maxp{max_papers}.maxy{max_years}.txt", format.tag())
}

/// Builds, writes and lists author pages.
#[derive(Debug)]
pub struct AuthorPages<S = FsStore> {
    client: ArxivClient,
    store: S,
    config: Config,
}

impl<S: SummaryStore> AuthorPages<S> {
    /// Create a page service.
    #[must_use]
    pub fn new(client: ArxivClient, store: S, config: Config) -> Self {
        Self { client, store, config }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up an author's biography in the configured author info file.
    pub fn load_bio(&self, author: &str) -> StoreResult<String> {
        let mut infos = self.store.load_author_infos(&self.config.author_info_file)?;
        infos.remove(author).ok_or_else(|| StoreError::missing_author_info(author))
    }

    /// Render an author's page without writing it.
    pub async fn make_author_page(&self, author: &str, request: &PageRequest) -> Result<String> {
        let bio = match &request.bio {
            Some(bio) => Cow::Borrowed(bio.as_str()),
            None => Cow::Owned(self.load_bio(author)?),
        };

        let records = match &request.records {
            Some(records) => Cow::Borrowed(records.as_slice()),
            None => {
                let params = [("max_results".to_string(), request.max_papers.to_string())];
                Cow::Owned(self.client.get_author_papers(author, &params).await?)
            }
        };

        let page = match (request.source, request.format) {
            (SummarySource::Abstract, SummaryFormat::Markdown) => formatters::make_author_page(
                &bio,
                author,
                &records,
                request.max_papers,
                request.max_years,
            ),
        };

        Ok(page)
    }

    /// Render an author's page and write it to the summaries directory.
    ///
    /// Returns the path written. An existing file at that path is replaced.
    pub async fn write_author_page(
        &self,
        author: &str,
        version: u32,
        request: &PageRequest,
    ) -> Result<PathBuf> {
        let page = self.make_author_page(author, request).await?;

        let filename = author_page_filename(
            author,
            request.format,
            version,
            request.max_papers,
            request.max_years,
        );
        let path = self.config.summaries_dir.join(filename);

        self.store.dump_file(&page, &path)?;
        tracing::info!(author, path = %path.display(), "Wrote author page");

        Ok(path)
    }

    /// Distinct, title-cased author names that have a page in the summaries directory.
    ///
    /// Every file stem must match the configured pattern from its start.
    /// With `version`, only pages whose `version` capture equals it are listed.
    pub fn list_authors_with_summaries(&self, version: Option<u32>) -> StoreResult<Vec<String>> {
        let pattern = &self.config.summary_file_pattern;
        let re = Regex::new(&format!("^(?:{pattern})"))?;

        if version.is_some() && !re.capture_names().any(|name| name == Some("version")) {
            return Err(StoreError::UnsupportedVersionFilter);
        }

        let mut names = BTreeSet::new();
        for stem in self.store.list_stems(&self.config.summaries_dir)? {
            let caps = re
                .captures(&stem)
                .ok_or_else(|| StoreError::ambiguous_filename(stem.as_str(), pattern.as_str()))?;

            if let Some(wanted) = version {
                let found = caps.name("version").and_then(|m| m.as_str().parse::<u32>().ok());
                if found != Some(wanted) {
                    continue;
                }
            }

            let name = caps
                .name("professor_name")
                .ok_or_else(|| StoreError::ambiguous_filename(stem.as_str(), pattern.as_str()))?;
            names.insert(title_case(&name.as_str().replace('_', " ")));
        }

        Ok(names.into_iter().collect())
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            output.push(ch);
            prev_alpha = false;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_page_filename() {
        assert_eq!(
            author_page_filename("Jane Q Doe", SummaryFormat::Markdown, 3, 100, 20.0),
            "jane_q_doe.markdown.v3.maxp100.maxy20.txt"
        );
        assert_eq!(
            author_page_filename("Doe", SummaryFormat::Markdown, 1, 5, 2.5),
            "doe.markdown.v1.maxp5.maxy2.5.txt"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jane q doe"), "Jane Q Doe");
        assert_eq!(title_case("MARY o'neil"), "Mary O'Neil");
        assert_eq!(title_case("j. doe-smith"), "J. Doe-Smith");
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.max_papers, 100);
        assert!((request.max_years - 20.0).abs() < f64::EPSILON);
        assert!(request.records.is_none());
        assert!(request.bio.is_none());
    }
}
