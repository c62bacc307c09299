//! Atom feed decoding.

use serde::Deserialize;

use crate::error::ClientResult;
use crate::models::RawEntry;

/// Top-level `<feed>`; everything but the entries is ignored.
#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<RawEntry>,
}

/// Decode an Atom document into its entries, in document order.
pub fn parse_feed(xml: &str) -> ClientResult<Vec<RawEntry>> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    Ok(feed.entries)
}
