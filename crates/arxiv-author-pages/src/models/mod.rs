//! Data models for arXiv feed entries and normalized papers.
//!
//! Raw entries mirror the Atom feed loosely; [`PaperRecord`] is the
//! validated form every later stage works with.

mod entry;
mod enums;
mod paper;

pub use entry::{RawAuthor, RawEntry, RawLink};
pub use enums::{QueryType, SummaryFormat, SummarySource};
pub use paper::{AuthorList, FEED_DATE_FORMAT, PaperRecord, parse_paper_entry};
