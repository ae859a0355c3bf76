//! Decoding of tag listing payloads.
//!
//! The content API answers with an envelope of the form
//! `{ "results": [ { "name": "<tag>" }, ... ] }`. Only the tag names are kept.

use crate::error::{HubtagError, Result};
use serde::Deserialize;


/// Envelope returned by the tag listing endpoint.
#[derive(Debug, Deserialize)]
struct TagsPage {
    results: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Decodes a tag listing payload into tag names, preserving source order.
///
/// An empty `results` array is not an error.
///
/// # Examples
///
/// ```
/// use libhubtag::decode::decode_tags;
///
/// let tags = decode_tags(br#"{"results":[{"name":"1.0.0"},{"name":"latest"}]}"#).unwrap();
/// assert_eq!(tags, vec!["1.0.0", "latest"]);
/// ```
pub fn decode_tags(payload: &[u8]) -> Result<Vec<String>> {
    let page: TagsPage = serde_json::from_slice(payload)
        .map_err(|e| HubtagError::decode_with_source("Failed to parse tags response", e))?;

    let tags: Vec<String> = page.results.into_iter().map(|entry| entry.name).collect();
    tracing::debug!(count = tags.len(), "decoded tags");
    Ok(tags)
}
