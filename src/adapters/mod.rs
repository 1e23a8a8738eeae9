//! Search backends.
//!
//! Backends give a uniform interface over different ways of looking up
//! books: the catalog itself, or an older system wrapped by an adapter.

pub mod legacy;

// Re-export the legacy adapter
pub use legacy::{LegacySearchAdapter, LegacySearchSystem};

use crate::library::{by_title, Catalog};

/// Trait for title search backends
pub trait SearchBackend {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Titles matching `keyword`, best first
    fn search_titles(&self, keyword: &str) -> Vec<String>;
}

impl SearchBackend for Catalog {
    fn name(&self) -> &str {
        "catalog"
    }

    fn search_titles(&self, keyword: &str) -> Vec<String> {
        Catalog::search(self, by_title, keyword)
            .into_iter()
            .map(|book| book.title.clone())
            .collect()
    }
}
