//! Error types for fetching, normalizing and storing author pages.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Errors from the arXiv HTTP client layer.
///
/// Every variant means the feed could not be fetched or decoded.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The response body is not a readable Atom feed
    #[error("Failed to parse feed: {0}")]
    Feed(#[from] quick_xml::DeError),
}

impl ClientError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }
}

/// Errors raised while normalizing a raw feed entry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// A timestamp field is not `YYYY-MM-DDThh:mm:ssZ`
    #[error("Malformed {field} date: {value:?}")]
    MalformedDate {
        /// Entry field holding the timestamp
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// The entry lists no authors
    #[error("Entry has no authors: {title:?}")]
    MissingAuthors {
        /// Title of the entry, for context
        title: String,
    },
}

impl EntryError {
    /// Create a malformed date error.
    #[must_use]
    pub fn malformed_date(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedDate { field, value: value.into() }
    }

    /// Create a missing authors error.
    #[must_use]
    pub fn missing_authors(title: impl Into<String>) -> Self {
        Self::MissingAuthors { title: title.into() }
    }
}

/// Errors from the page storage layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Author info file is not a JSON object of strings
    #[error("Invalid author info file {}: {source}", path.display())]
    Json {
        /// Path of the author info file
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// No biography for the requested author
    #[error("No author info for {author:?}")]
    MissingAuthorInfo {
        /// Author looked up
        author: String,
    },

    /// A file in the summaries directory does not follow the naming pattern
    #[error("File {file:?} does not match summary pattern {pattern:?}")]
    AmbiguousFilenameMatch {
        /// File stem that failed to match
        file: String,
        /// Pattern it was matched against
        pattern: String,
    },

    /// Summary file pattern is not a valid regex
    #[error("Invalid summary file pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Version filtering was requested but the pattern has no `version` group
    #[error("Summary file pattern has no `version` capture group")]
    UnsupportedVersionFilter,
}

impl StoreError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a missing author info error.
    #[must_use]
    pub fn missing_author_info(author: impl Into<String>) -> Self {
        Self::MissingAuthorInfo { author: author.into() }
    }

    /// Create an ambiguous filename match error.
    #[must_use]
    pub fn ambiguous_filename(file: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::AmbiguousFilenameMatch { file: file.into(), pattern: pattern.into() }
    }
}

/// Any failure while producing an author page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Fetching the feed failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ClientError),

    /// An entry could not be normalized
    #[error("Bad entry: {0}")]
    Entry(#[from] EntryError),

    /// Reading or writing local storage failed
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl Error {
    /// Returns true if this error came from the network or feed decoding.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for end-to-end operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_message() {
        let err = EntryError::malformed_date("published", "2024-01-01");
        let msg = err.to_string();
        assert!(msg.contains("published"));
        assert!(msg.contains("2024-01-01"));
    }

    #[test]
    fn test_error_from_layers() {
        let err: Error = ClientError::unexpected_status(503, "down").into();
        assert!(err.is_fetch_failure());

        let err: Error = StoreError::missing_author_info("Jane Doe").into();
        assert!(!err.is_fetch_failure());
        assert!(err.to_string().contains("Jane Doe"));
    }

    #[test]
    fn test_ambiguous_filename_message() {
        let err = StoreError::ambiguous_filename("notes", "(?P<professor_name>.+)");
        assert!(matches!(err, StoreError::AmbiguousFilenameMatch { .. }));
        assert!(err.to_string().contains("notes"));
    }
}
