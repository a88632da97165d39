//! Owned, ordered copy of a response header block.

use std::fmt::{Display, Formatter, Result as FormatResult};

use reqwest::header::HeaderMap;
use serde::Serialize;

/// Response headers in the order the source yielded them.
///
/// Repeated names are kept as separate entries. When copied from a
/// `HeaderMap`, all values for one name come out together, so interleaved
/// repeats on the wire end up grouped by name. Lookups compare names
/// ASCII case-insensitively, the way HTTP defines header names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Every value recorded for `name`, in arrival order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl From<Vec<(String, String)>> for ResponseHeaders {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl<N, V> FromIterator<(N, V)> for ResponseHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<&HeaderMap> for ResponseHeaders {
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect()
    }
}

/// One `name: value` line per entry, each terminated by a newline.
impl Display for ResponseHeaders {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        for (name, value) in &self.entries {
            writeln!(formatter, "{name}: {value}")?;
        }
        Ok(())
    }
}
