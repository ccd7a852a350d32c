// src/headers.rs

use reqwest::header::HeaderMap;
use serde_json::Value;

/// Raw header input, before normalization. Callers hand over whichever
/// representation they have; `HeaderSet::from_raw` flattens all of them
/// into canonical string pairs.
#[derive(Clone, Debug)]
pub enum RawHeader {
    /// Name and value are both already text.
    Text(String, String),
    /// Name known at compile time, value text.
    Named(&'static str, String),
    /// Value in structured form, coerced to its textual representation.
    Json(String, Value),
}

impl RawHeader {
    fn into_pair(self) -> (String, String) {
        match self {
            RawHeader::Text(name, value) => (name, value),
            RawHeader::Named(name, value) => (name.to_string(), value),
            RawHeader::Json(name, value) => (name, json_to_text(value)),
        }
    }
}

// Strings render without quotes; everything else keeps its JSON form.
fn json_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Ordered collection of header name/value pairs. Duplicate names are
/// permitted and insertion order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a batch of raw inputs. Never fails; pairs with an empty
    /// name are dropped. Header-name grammar is not checked here, bad
    /// names surface as transport errors when the request is sent.
    pub fn from_raw(raw: Vec<RawHeader>) -> Self {
        let mut set = Self::new();
        for entry in raw {
            let (name, value) = entry.into_pair();
            set.push(name, value);
        }
        set
    }

    /// Convert response headers into an ordered set. Values that are not
    /// valid UTF-8 become empty strings.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut set = Self::new();
        for (name, value) in map.iter() {
            set.push(name.as_str(), value.to_str().unwrap_or(""));
        }
        set
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.entries.push((name, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value recorded for `name`, comparing case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl From<Vec<(String, String)>> for HeaderSet {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.push(name, value);
        }
        set
    }
}

impl From<Vec<(&str, &str)>> for HeaderSet {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.push(name, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalization_preserves_count_and_order() {
        let set = HeaderSet::from_raw(vec![
            RawHeader::Text("Accept".into(), "text/html".into()),
            RawHeader::Named("X-Trace", "abc".into()),
            RawHeader::Json("X-Retry".into(), json!(3)),
        ]);
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Accept", "text/html"),
                ("X-Trace", "abc"),
                ("X-Retry", "3"),
            ]
        );
    }

    #[test]
    fn json_strings_render_without_quotes() {
        let set = HeaderSet::from_raw(vec![RawHeader::Json(
            "X-Label".into(),
            json!("plain"),
        )]);
        assert_eq!(set.get("x-label"), Some("plain"));
    }

    #[test]
    fn json_values_coerce_to_text() {
        let set = HeaderSet::from_raw(vec![
            RawHeader::Json("X-Flag".into(), json!(true)),
            RawHeader::Json("X-Ratio".into(), json!(0.5)),
        ]);
        assert_eq!(set.get("X-Flag"), Some("true"));
        assert_eq!(set.get("X-Ratio"), Some("0.5"));
    }

    #[test]
    fn empty_names_are_dropped() {
        let set = HeaderSet::from_raw(vec![
            RawHeader::Text("".into(), "ignored".into()),
            RawHeader::Text("Kept".into(), "".into()),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Kept"), Some(""));
    }

    #[test]
    fn duplicate_names_keep_both_values_in_order() {
        let set = HeaderSet::from(vec![
            ("Set-Cookie", "a=1"),
            ("Set-Cookie", "b=2"),
        ]);
        let values: Vec<_> = set.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["a=1", "b=2"]);
    }

    #[test]
    fn from_string_pairs() {
        let set = HeaderSet::from(vec![("Host".to_string(), "example.com".to_string())]);
        assert_eq!(set.get("host"), Some("example.com"));
    }
}
