//! Header list compaction.
//!
//! Summaries carry headers as ordered `{key, value}` lists where a key may
//! repeat. Export documents want a single mapping, so repeated keys collapse
//! with the last occurrence winning. Multi-value headers are not preserved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single header as it appears in a run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHeader {
    /// Header name, case as sent.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub key: String,
    /// Header value.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub value: String,
}

impl RawHeader {
    /// Creates a new header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Compacted header mapping. Sorted so exports serialize deterministically.
pub type HeaderMap = BTreeMap<String, String>;

/// Folds an ordered header list into a mapping; later duplicates overwrite
/// earlier ones.
pub fn compact_headers<'a, I>(headers: I) -> HeaderMap
where
    I: IntoIterator<Item = &'a RawHeader>,
{
    headers.into_iter().fold(HeaderMap::new(), |mut map, header| {
        map.insert(header.key.clone(), header.value.clone());
        map
    })
}

/// Finds the `Content-Type` value in an ordered header list.
///
/// Matching is case-insensitive and follows the same last-wins rule as
/// [`compact_headers`].
pub fn content_type<'a, I>(headers: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a RawHeader>,
{
    headers
        .into_iter()
        .filter(|h| h.key.eq_ignore_ascii_case("content-type"))
        .last()
        .map(|h| h.value.as_str())
}
