//! Raw Atom entries as returned by the arXiv query API.
//!
//! Fields default when absent so that decoding never rejects an entry;
//! validation happens in [`parse_paper_entry`](super::parse_paper_entry).

use serde::Deserialize;

/// One `<entry>` of the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    /// Paper title.
    #[serde(default)]
    pub title: String,

    /// Abstract text, possibly spanning several lines.
    #[serde(default)]
    pub summary: String,

    /// First submission timestamp (`YYYY-MM-DDThh:mm:ssZ`).
    #[serde(default)]
    pub published: String,

    /// Latest revision timestamp.
    #[serde(default)]
    pub updated: String,

    /// Authors in feed order.
    #[serde(rename = "author", default)]
    pub authors: Vec<RawAuthor>,

    /// Alternate, PDF and DOI links.
    #[serde(rename = "link", default)]
    pub links: Vec<RawLink>,
}

/// `<author>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAuthor {
    /// Author display name.
    #[serde(default)]
    pub name: String,
}

impl RawAuthor {
    /// Create an author with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `<link>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLink {
    /// Link target.
    #[serde(rename = "@href", default)]
    pub href: String,

    /// Optional label; arXiv marks the PDF link with `title="pdf"`.
    #[serde(rename = "@title", default)]
    pub title: Option<String>,
}

impl RawLink {
    /// Create a link with an optional label.
    #[must_use]
    pub fn new(href: impl Into<String>, title: Option<&str>) -> Self {
        Self { href: href.into(), title: title.map(str::to_string) }
    }
}
