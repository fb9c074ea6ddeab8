//! Translation lookup over a shared catalog.

use std::sync::Arc;

use thiserror::Error;

use crate::path::{
    DEFAULT_SEPARATOR,
    DottedPath,
};
use crate::table::{
    TranslationTable,
    TranslationValue,
};

/// Why a strict lookup did not reach a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A segment is not a key of the table it was looked up in.
    #[error("Translation key '{path}' not found: no entry '{segment}'")]
    MissingKey { path: String, segment: String },

    /// The path continues past a leaf string.
    #[error("Translation key '{path}' not found: '{segment}' is below a leaf")]
    LeafReached { path: String, segment: String },
}

/// Read-only translation context.
///
/// Cloning is cheap: every clone shares the same catalog, which is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct TranslationProvider {
    /// Catalog root.
    table: Arc<TranslationTable>,
    /// Path separator used by every lookup.
    separator: String,
}

impl TranslationProvider {
    #[must_use]
    pub fn new(table: impl Into<Arc<TranslationTable>>) -> Self {
        Self::with_separator(table, DEFAULT_SEPARATOR)
    }

    /// An empty separator falls back to [`DEFAULT_SEPARATOR`].
    #[must_use]
    pub fn with_separator(table: impl Into<Arc<TranslationTable>>, separator: &str) -> Self {
        let separator = if separator.is_empty() { DEFAULT_SEPARATOR } else { separator };
        Self { table: table.into(), separator: separator.to_string() }
    }

    /// The shared catalog.
    #[must_use]
    pub const fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Resolve `path` to a leaf string.
    ///
    /// Any miss yields `None`, as does a path that stops on a nested table.
    ///
    /// # Examples
    /// ```
    /// use i18n_plugin::{TranslationProvider, TranslationTable};
    ///
    /// let table = TranslationTable::new()
    ///     .with("zh", TranslationTable::new().with("hello", "你好，世界"));
    /// let provider = TranslationProvider::new(table);
    ///
    /// assert_eq!(provider.translate("zh.hello"), Some("你好，世界"));
    /// assert_eq!(provider.translate("en.hello"), None);
    /// ```
    #[must_use]
    pub fn translate(&self, path: &str) -> Option<&str> {
        self.resolve(path).and_then(Entry::as_leaf)
    }

    /// Resolve `path` to whatever it reaches, leaf or table.
    ///
    /// The empty path reaches the root table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Entry<'_>> {
        match self.try_resolve(path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::trace!("{e}");
                None
            }
        }
    }

    /// Like [`Self::resolve`], but reports which segment missed and how.
    pub fn try_resolve(&self, path: &str) -> Result<Entry<'_>, LookupError> {
        let path = DottedPath::with_separator(path, &self.separator);

        path.segments().try_fold(Entry::Table(self.table.as_ref()), |current, segment| {
            match current {
                Entry::Table(table) => table.get(segment).map(Entry::from).ok_or_else(|| {
                    LookupError::MissingKey { path: path.to_string(), segment: segment.to_string() }
                }),
                Entry::Leaf(_) => Err(LookupError::LeafReached {
                    path: path.to_string(),
                    segment: segment.to_string(),
                }),
            }
        })
    }
}

/// A borrowed view of what a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// A translated string.
    Leaf(&'a str),
    /// A nested table, or the root.
    Table(&'a TranslationTable),
}

impl<'a> Entry<'a> {
    #[must_use]
    pub const fn as_leaf(self) -> Option<&'a str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Table(_) => None,
        }
    }

    #[must_use]
    pub const fn as_table(self) -> Option<&'a TranslationTable> {
        match self {
            Self::Leaf(_) => None,
            Self::Table(table) => Some(table),
        }
    }
}

impl<'a> From<&'a TranslationValue> for Entry<'a> {
    fn from(value: &'a TranslationValue) -> Self {
        match value {
            TranslationValue::Leaf(text) => Self::Leaf(text),
            TranslationValue::Node(table) => Self::Table(table),
        }
    }
}
