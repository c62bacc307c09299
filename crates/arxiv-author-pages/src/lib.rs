//! arXiv Author Pages
//!
//! Fetches an author's papers from the arXiv query API, normalizes the Atom
//! entries into [`PaperRecord`](models::PaperRecord)s and renders them into a
//! Markdown "research summary" page next to a short biography.
//!
//! # Pipeline
//!
//! - **Query**: [`client::build_author_query`] / [`client::build_id_query`]
//! - **Fetch**: [`ArxivClient::query_api`] decodes the feed
//! - **Normalize**: [`models::parse_paper_entry`]
//! - **Render**: [`formatters::make_author_page`]
//! - **Write**: [`AuthorPages::write_author_page`]
//!
//! # Example
//!
//! ```no_run
//! use arxiv_author_pages::{ArxivClient, AuthorPages, Config, FsStore, PageRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::with_overrides(None, Some("pages".into()), None, None)?;
//!     let client = ArxivClient::new(&config)?;
//!     let pages = AuthorPages::new(client, FsStore, config);
//!
//!     let path = pages.write_author_page("Jane Doe", 1, &PageRequest::default()).await?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pages;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, EntryError, Error, StoreError};
pub use pages::{AuthorPages, FsStore, MemoryStore, PageRequest, SummaryStore};
