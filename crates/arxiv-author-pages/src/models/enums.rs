//! Closed label types for queries and summaries.

/// Kind of arXiv query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// Look papers up by arXiv identifier.
    IdList,
    /// Free-form search (used for author queries).
    Search,
}

impl QueryType {
    /// Query-string key for this query type.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::IdList => "id_list",
            Self::Search => "search_query",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param())
    }
}

/// What a page's paper summaries are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummarySource {
    /// The abstract from the feed.
    #[default]
    Abstract,
}

/// Output format of an author page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Markdown text.
    #[default]
    Markdown,
}

impl SummaryFormat {
    /// Tag used in page file names.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
        }
    }
}
