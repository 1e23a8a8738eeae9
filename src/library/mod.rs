//! The library registry and its collaborators.
//!
//! - `catalog`: owns books, members and the loan ledger
//! - `notify`: observers told when a book is back on the shelf
//! - `search`: strategy-based book search

pub mod catalog;
pub mod notify;
pub mod search;

pub use catalog::{Catalog, CatalogError};
pub use notify::{AvailabilityNotifier, AvailabilityObserver, SubscriptionId};
pub use search::{by_author, by_isbn, by_title, BookFinder, SearchStrategy};
