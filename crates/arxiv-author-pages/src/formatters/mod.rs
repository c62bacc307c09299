//! Output formatting for author pages.

mod markdown;

pub use markdown::{format_paper_markdown, make_author_page, make_author_page_as_of};
