//! Query URL construction for the arXiv API.
//!
//! Values are joined as-is: the only encoding applied is spaces to `%20` in
//! author names. Callers must not pass values containing `&` or `=`.

use crate::models::QueryType;

/// Parameters every author query carries unless overridden.
pub const AUTHOR_QUERY_DEFAULTS: &[(&str, &str)] =
    &[("sortBy", "submittedDate"), ("sortOrder", "descending")];

/// Build a query for a list of arXiv identifiers.
///
/// An empty `ids` slice yields an empty `id_list=` value.
#[must_use]
pub fn build_id_query(base: &str, ids: &[String], extra_params: &[(String, String)]) -> String {
    let head = format!("{}?{}={}", base, QueryType::IdList, ids.join(","));
    join_params(head, &merge_params(&[], extra_params))
}

/// Build a query for all papers by `author`, newest first by default.
///
/// `extra_params` override the defaults key by key; new keys are appended in order.
#[must_use]
pub fn build_author_query(base: &str, author: &str, extra_params: &[(String, String)]) -> String {
    let sanitized = author.replace(' ', "%20");
    let head = format!("{}?{}=au:\"{}\"", base, QueryType::Search, sanitized);
    join_params(head, &merge_params(AUTHOR_QUERY_DEFAULTS, extra_params))
}

/// Merge with map semantics: first insertion fixes the position, last value wins.
fn merge_params(defaults: &[(&str, &str)], overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> =
        defaults.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();

    for (key, value) in overrides {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1.clone_from(value),
            None => merged.push((key.clone(), value.clone())),
        }
    }

    merged
}

fn join_params(head: String, params: &[(String, String)]) -> String {
    let mut query = head;
    for (key, value) in params {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}
