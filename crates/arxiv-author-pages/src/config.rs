//! Configuration for the arXiv client and page storage.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query endpoint.
    pub const QUERY_URL: &str = "https://export.arxiv.org/api/query";

    /// Path of the query endpoint, relative to a base URL.
    pub const QUERY_PATH: &str = "/api/query";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("arxiv-author-pages/", env!("CARGO_PKG_VERSION"));
}

/// Defaults for page generation.
pub mod defaults {
    /// Papers considered per page.
    pub const MAX_PAPERS: usize = 100;

    /// Papers older than this many years are left off the page.
    pub const MAX_YEARS: f64 = 20.0;

    /// Directory holding written author pages.
    pub const SUMMARIES_DIR: &str = "author_summaries";

    /// JSON file mapping author name to biography.
    pub const AUTHOR_INFO_FILE: &str = "author_info.json";

    /// Pattern for written page stems (file name without the final `.txt`).
    pub const SUMMARY_FILE_PATTERN: &str =
        r"(?P<professor_name>.+?)\.(?P<format>[a-z]+)\.v(?P<version>\d+)\.maxp\d+\.maxy[\d.]+";
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Query endpoint URL (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Directory where author pages are written and listed.
    pub summaries_dir: PathBuf,

    /// JSON file with author biographies.
    pub author_info_file: PathBuf,

    /// Regex matched against page file stems; must expose `professor_name`.
    pub summary_file_pattern: String,
}

impl Config {
    /// Create a configuration with the given storage locations.
    #[must_use]
    pub fn new(summaries_dir: impl Into<PathBuf>, author_info_file: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api::QUERY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            summaries_dir: summaries_dir.into(),
            author_info_file: author_info_file.into(),
            summary_file_pattern: defaults::SUMMARY_FILE_PATTERN.to_string(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}{}", base_url, api::QUERY_PATH),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::default()
        }
    }

    /// Apply caller-supplied settings over the defaults; `None` keeps the default.
    ///
    /// # Errors
    ///
    /// Returns error if the summary file pattern is not a valid regex.
    pub fn with_overrides(
        api_url: Option<String>,
        summaries_dir: Option<PathBuf>,
        author_info_file: Option<PathBuf>,
        summary_file_pattern: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(url) = api_url {
            config.api_url = url;
        }
        if let Some(dir) = summaries_dir {
            config.summaries_dir = dir;
        }
        if let Some(file) = author_info_file {
            config.author_info_file = file;
        }
        if let Some(pattern) = summary_file_pattern {
            regex::Regex::new(&pattern)?;
            config.summary_file_pattern = pattern;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::SUMMARIES_DIR, defaults::AUTHOR_INFO_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, api::QUERY_URL);
        assert_eq!(config.summaries_dir, PathBuf::from(defaults::SUMMARIES_DIR));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.api_url, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::with_overrides(
            Some("http://localhost:1/api/query".to_string()),
            Some(PathBuf::from("pages")),
            None,
            Some(r"(?P<professor_name>[a-z_]+)".to_string()),
        )
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:1/api/query");
        assert_eq!(config.summaries_dir, PathBuf::from("pages"));
        assert_eq!(config.author_info_file, PathBuf::from(defaults::AUTHOR_INFO_FILE));
        assert_eq!(config.summary_file_pattern, r"(?P<professor_name>[a-z_]+)");
    }

    #[test]
    fn test_config_without_overrides_is_default() {
        let config = Config::with_overrides(None, None, None, None).unwrap();
        assert_eq!(config.api_url, api::QUERY_URL);
        assert_eq!(config.summary_file_pattern, defaults::SUMMARY_FILE_PATTERN);
    }

    #[test]
    fn test_config_rejects_invalid_pattern() {
        assert!(Config::with_overrides(None, None, None, Some("(?P<x".to_string())).is_err());
    }

    #[test]
    fn test_default_pattern_compiles() {
        let re = regex::Regex::new(defaults::SUMMARY_FILE_PATTERN).unwrap();
        let caps = re.captures("jane_doe.markdown.v1.maxp100.maxy20").unwrap();
        assert_eq!(&caps["professor_name"], "jane_doe");
        assert_eq!(&caps["version"], "1");
    }
}
