//! Canonical paper record and the feed entry normalizer.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::RawEntry;
use crate::error::EntryError;

/// Timestamp format used by the arXiv feed.
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Fixed-width shape of [`FEED_DATE_FORMAT`]; chrono alone accepts signs,
/// padding and single-digit fields.
static FEED_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("valid feed date regex")
});

/// A paper normalized from one feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title.
    pub title: String,

    /// Abstract collapsed to a single line.
    pub r#abstract: String,

    /// Date of first submission.
    pub published: NaiveDate,

    /// Date of the latest revision.
    pub updated: NaiveDate,

    /// Authors in feed order.
    pub authors: AuthorList,

    /// Link to the PDF, if the entry has one.
    #[serde(default)]
    pub pdf_link: Option<String>,
}

/// Ordered, non-empty list of author names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AuthorList(Vec<String>);

impl AuthorList {
    /// Build an author list, returning `None` when `names` is empty.
    #[must_use]
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() { None } else { Some(Self(names)) }
    }

    /// First listed author.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Last listed author (same as the first for single-author papers).
    #[must_use]
    pub fn last(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Authors between the first and the last; empty for two or fewer.
    #[must_use]
    pub fn middle(&self) -> &[String] {
        if self.0.len() > 2 { &self.0[1..self.0.len() - 1] } else { &[] }
    }

    /// Number of authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the list holds no names; never the case for a constructed list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All author names.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for AuthorList {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names).ok_or_else(|| "author list must not be empty".to_string())
    }
}

impl From<AuthorList> for Vec<String> {
    fn from(list: AuthorList) -> Self {
        list.0
    }
}

/// Normalize one raw feed entry into a [`PaperRecord`].
///
/// The PDF link is the last link labelled exactly `"pdf"`. Dates must match
/// [`FEED_DATE_FORMAT`]; the time of day is dropped. Newlines in the abstract
/// become single spaces.
pub fn parse_paper_entry(entry: &RawEntry) -> Result<PaperRecord, EntryError> {
    let pdf_link = entry
        .links
        .iter()
        .rev()
        .find(|link| link.title.as_deref() == Some("pdf"))
        .map(|link| link.href.clone());

    let published = parse_feed_date("published", &entry.published)?;
    let updated = parse_feed_date("updated", &entry.updated)?;

    let names = entry.authors.iter().map(|a| a.name.clone()).collect();
    let authors =
        AuthorList::new(names).ok_or_else(|| EntryError::missing_authors(entry.title.as_str()))?;

    Ok(PaperRecord {
        title: entry.title.clone(),
        r#abstract: collapse_lines(&entry.summary),
        published,
        updated,
        authors,
        pdf_link,
    })
}

fn parse_feed_date(field: &'static str, value: &str) -> Result<NaiveDate, EntryError> {
    if !FEED_DATE_SHAPE.is_match(value) {
        return Err(EntryError::malformed_date(field, value));
    }

    NaiveDateTime::parse_from_str(value, FEED_DATE_FORMAT)
        .map(|dt| dt.date())
        .map_err(|_| EntryError::malformed_date(field, value))
}

fn collapse_lines(text: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join(" ")
}
