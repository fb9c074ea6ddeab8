//! Translation catalog data model.
//!
//! A catalog is a tree: every node maps string keys to either a leaf string
//! or another node. One locale's catalog usually sits under a top-level key
//! (e.g. `{"zh": {"hello": "你好，世界"}}`).

use std::collections::BTreeMap;
use std::collections::HashMap;

/// A nested, string-keyed translation catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Child entries, ordered by key.
    entries: BTreeMap<String, TranslationValue>,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    /// A translated string.
    Leaf(String),
    /// A nested table.
    Node(TranslationTable),
}

impl TranslationValue {
    /// Returns the string if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// Returns the nested table if this is a node.
    #[must_use]
    pub const fn as_node(&self) -> Option<&TranslationTable> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(table) => Some(table),
        }
    }

    /// Looks up a direct child. Leaves have no children.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&Self> {
        self.as_node().and_then(|table| table.get(segment))
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<TranslationTable> for TranslationValue {
    fn from(table: TranslationTable) -> Self {
        Self::Node(table)
    }
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TranslationValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, replacing any previous value under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TranslationValue>,
    ) -> Option<TranslationValue> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flatten the tree into a `dotted.key -> leaf` map.
    ///
    /// # Examples
    /// ```
    /// use i18n_plugin::TranslationTable;
    ///
    /// let table = TranslationTable::new()
    ///     .with("zh", TranslationTable::new().with("hello", "你好，世界"));
    ///
    /// let flattened = table.flatten(".");
    /// assert_eq!(flattened.get("zh.hello"), Some(&"你好，世界".to_string()));
    /// ```
    #[must_use]
    pub fn flatten(&self, separator: &str) -> HashMap<String, String> {
        let mut result = HashMap::new();
        flatten_table(self, separator, None, &mut result);
        result
    }
}

/// Recursive worker for [`TranslationTable::flatten`].
fn flatten_table(
    table: &TranslationTable,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    for (key, value) in table.iter() {
        let full_key = prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"));
        match value {
            TranslationValue::Leaf(text) => {
                result.insert(full_key, text.clone());
            }
            TranslationValue::Node(child) => {
                flatten_table(child, separator, Some(&full_key), result);
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<TranslationValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
