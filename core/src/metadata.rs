//! Leading metadata block.
//!
//! A recipe may start with a block of `key: value` lines fenced by `---`
//! marker lines:
//!
//! ```text
//! ---
//! title: Classic Pancakes
//! servings: 4
//! tags: [breakfast, quick]
//! ---
//! let servings = 4;
//! ```
//!
//! The block is removed before tokenizing. Its lines are still counted so the
//! tokenizer can keep reporting physical line numbers of the full source.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Line that opens and closes the metadata block.
pub const MARKER: &str = "---";

/// The one key whose value is stored as a number when it parses as one.
pub const NUMERIC_KEY: &str = "servings";

/// A single metadata value.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Flat key/value mapping extracted from the metadata block.
///
/// Keys keep the order in which they first appear; a repeated key replaces
/// the earlier value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn insert(&mut self, key: String, value: MetadataValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convenience accessor for the `title` key.
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(MetadataValue::as_text)
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of [`extract`].
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<'a> {
    /// `None` when the source does not start with a metadata block.
    pub metadata: Option<Metadata>,
    /// Source text following the block (the whole input when there is none).
    pub remainder: &'a str,
    /// Number of physical lines removed from the front of the source.
    pub lines_consumed: usize,
}

/// Split an optional leading metadata block off `source`.
///
/// The block must start on the very first line. Without a closing marker the
/// input is returned untouched.
pub fn extract(source: &str) -> Extracted<'_> {
    let untouched = Extracted {
        metadata: None,
        remainder: source,
        lines_consumed: 0,
    };

    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return untouched;
    };
    if !first.ends_with('\n') || !is_marker(first) {
        return untouched;
    }

    let mut consumed = first.len();
    let mut body = Vec::new();
    for line in lines {
        consumed += line.len();
        if is_marker(line) {
            tracing::debug!(lines = body.len(), "extracted metadata block");
            return Extracted {
                metadata: Some(parse_block(&body)),
                remainder: &source[consumed..],
                lines_consumed: body.len() + 2,
            };
        }
        body.push(line);
    }

    untouched
}

fn is_marker(line: &str) -> bool {
    line.trim_end() == MARKER
}

fn parse_block(lines: &[&str]) -> Metadata {
    let mut metadata = Metadata::default();

    for line in lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = strip_quotes(value.trim());

        let parsed = if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
            // Quotes come off each item before escaping; empty items are dropped.
            let items = value[1..value.len() - 1]
                .split(',')
                .map(|item| item.trim().replace(['"', '\''], ""))
                .filter(|item| !item.is_empty())
                .map(|item| sanitize(&item))
                .collect();
            MetadataValue::List(items)
        } else {
            let sanitized = sanitize(value);
            match sanitized.parse::<f64>() {
                Ok(n) if key == NUMERIC_KEY && n.is_finite() => MetadataValue::Number(n),
                _ => MetadataValue::Text(sanitized),
            }
        };

        metadata.insert(key.to_string(), parsed);
    }

    metadata
}

/// Remove one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Escape characters that would otherwise be rendered as markup downstream.
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }
    out
}
