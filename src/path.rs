//! Dotted translation key paths.

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A borrowed `segment(.segment)*` path.
///
/// Splitting keeps empty segments, so `"a..b"` is `["a", "", "b"]`. The empty
/// string is the one exception: it has no segments at all and addresses the
/// catalog root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DottedPath<'a> {
    /// Raw path text.
    raw: &'a str,
    /// Segment separator.
    separator: &'a str,
}

impl<'a> DottedPath<'a> {
    /// Creates a path using [`DEFAULT_SEPARATOR`].
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw, separator: DEFAULT_SEPARATOR }
    }

    /// Creates a path with a custom separator. An empty separator is treated
    /// as the default one.
    #[must_use]
    pub fn with_separator(raw: &'a str, separator: &'a str) -> Self {
        let separator = if separator.is_empty() { DEFAULT_SEPARATOR } else { separator };
        Self { raw, separator }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.raw.is_empty()
    }

    /// Ordered segments of the path.
    pub fn segments(self) -> impl Iterator<Item = &'a str> {
        let Self { raw, separator } = self;
        (!raw.is_empty()).then(|| raw.split(separator)).into_iter().flatten()
    }
}

impl<'a> From<&'a str> for DottedPath<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for DottedPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw)
    }
}
