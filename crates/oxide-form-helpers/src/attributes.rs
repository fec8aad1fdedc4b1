//! Ordered HTML attribute maps.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::escape::Escaper;

static ATTRIBUTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\s"'>/=\x00-\x1f\x7f]+$"#).expect("attribute name pattern is valid")
});

/// Returns whether `name` can be used as an HTML attribute name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAME.is_match(name)
}

/// HTML attributes in insertion order.
///
/// Setting an existing key replaces its value in place, so the rendered
/// order stays the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for Attributes {
    fn from(entries: Vec<(String, String)>) -> Self {
        let mut attrs = Self::new();
        for (key, value) in entries {
            attrs.set(key, value);
        }
        attrs
    }
}

impl From<Attributes> for Vec<(String, String)> {
    fn from(attrs: Attributes) -> Self {
        attrs.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the attribute is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets every attribute of `other`, overriding existing values.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Puts framework `classes` in front of the existing `class` value.
    ///
    /// Duplicate class names are dropped; the first occurrence wins.
    pub fn merge_class(&mut self, classes: &str) {
        let existing = self.get("class").unwrap_or_default().to_string();
        self.set_classes(classes.split_whitespace().chain(existing.split_whitespace()));
    }

    /// Appends `classes` after the existing `class` value.
    pub fn add_class(&mut self, classes: &str) {
        let existing = self.get("class").unwrap_or_default().to_string();
        self.set_classes(existing.split_whitespace().chain(classes.split_whitespace()));
    }

    /// Appends space-separated tokens to an attribute such as `aria-describedby`.
    pub fn append_token(&mut self, key: &str, token: &str) {
        let existing = self.get(key).unwrap_or_default();
        if existing.split_whitespace().any(|t| t == token) {
            return;
        }
        let joined = if existing.trim().is_empty() {
            token.to_string()
        } else {
            format!("{} {token}", existing.trim())
        };
        self.set(key, joined);
    }

    fn set_classes<'a>(&mut self, classes: impl Iterator<Item = &'a str>) {
        let mut seen: Vec<&str> = Vec::new();
        for class in classes {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
        if seen.is_empty() {
            return;
        }
        let joined = seen.join(" ");
        self.set("class", joined);
    }

    /// Renders the attributes as ` key="value"` pairs.
    ///
    /// The result is empty or starts with a space. Keys that are not valid
    /// attribute names are skipped.
    pub fn render(&self, escaper: &dyn Escaper) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            if !is_valid_attribute_name(key) {
                warn!(attribute = key, "dropping invalid attribute name");
                continue;
            }
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escaper.escape_attr(value));
            out.push('"');
        }
        out
    }
}
