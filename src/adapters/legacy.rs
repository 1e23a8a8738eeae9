//! Adapter for the old title index.
//!
//! The legacy system answers lookups with a single `;`-separated string.
//! `LegacySearchAdapter` wraps it so it can stand in wherever a
//! `SearchBackend` is expected.

use tracing::debug;

use super::SearchBackend;

/// Separator used by the legacy result format
const LEGACY_SEPARATOR: &str = ";";

/// Old title index with its own lookup format
#[derive(Debug, Clone, Default)]
pub struct LegacySearchSystem {
    titles: Vec<String>,
}

impl LegacySearchSystem {
    /// Build an index over `titles`
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Legacy lookup: case-insensitive substring match, results joined by `;`.
    /// No match yields an empty string.
    pub fn legacy_lookup(&self, keyword: &str) -> String {
        let keyword = keyword.to_lowercase();
        self.titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&keyword))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(LEGACY_SEPARATOR)
    }
}

/// Presents a `LegacySearchSystem` as a `SearchBackend`
#[derive(Debug, Clone, Copy)]
pub struct LegacySearchAdapter<'a> {
    inner: &'a LegacySearchSystem,
}

impl<'a> LegacySearchAdapter<'a> {
    /// Wrap a legacy index
    pub fn new(inner: &'a LegacySearchSystem) -> Self {
        Self { inner }
    }
}

impl SearchBackend for LegacySearchAdapter<'_> {
    fn name(&self) -> &str {
        "legacy"
    }

    fn search_titles(&self, keyword: &str) -> Vec<String> {
        let raw = self.inner.legacy_lookup(keyword);
        debug!(keyword, raw = %raw, "Legacy lookup");

        raw.split(LEGACY_SEPARATOR)
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(String::from)
            .collect()
    }
}
