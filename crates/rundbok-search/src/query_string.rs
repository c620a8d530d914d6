//! Location query-string codec.
//!
//! The location is an ordered `key=value` query-string. Parsing and
//! serializing are lossless for well-formed input, and keys this crate does
//! not own are preserved untouched (position included) when the filter
//! parameters are rewritten.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use rundbok_model::SearchCriteria;

/// Query parameter carrying the selected programme id.
pub const PROGRAMME_ID_PARAM: &str = "programme_id";

/// Query parameter carrying the selected course id.
pub const COURSE_ID_PARAM: &str = "course_id";

/// Characters escaped in keys and values.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// An ordered multiset of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a raw query-string. A leading `?` and empty segments are
    /// tolerated; a key without `=` parses as an empty value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn serialize(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first occurrence of `key` in place, or append it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Read the filter criteria out of a query-string.
///
/// Unparsable or absent id parameters read as no selection. The free-text
/// query is not part of the location contract and always reads as unset.
pub fn criteria_from_query(query: &QueryString) -> SearchCriteria {
    SearchCriteria {
        programme_id: query.get(PROGRAMME_ID_PARAM).and_then(|v| v.parse().ok()),
        course_id: query.get(COURSE_ID_PARAM).and_then(|v| v.parse().ok()),
        query_text: None,
    }
}

/// Write the filter criteria into a query-string, leaving unrelated keys
/// alone. A cleared selection removes its parameter entirely.
pub fn write_criteria(query: &mut QueryString, criteria: &SearchCriteria) {
    match criteria.programme_id {
        Some(id) => query.set(PROGRAMME_ID_PARAM, id.to_string()),
        None => query.remove(PROGRAMME_ID_PARAM),
    }
    match criteria.course_id {
        Some(id) => query.set(COURSE_ID_PARAM, id.to_string()),
        None => query.remove(COURSE_ID_PARAM),
    }
}
