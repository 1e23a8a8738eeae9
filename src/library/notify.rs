//! Availability notifications.
//!
//! The catalog owns one notifier and fires it whenever a returned book is
//! back on the shelf.

use tracing::info;

use crate::domain::{Book, Member};

/// Receives a callback when a book becomes available
pub trait AvailabilityObserver {
    /// Called after `book` has been returned
    fn on_available(&self, book: &Book);
}

impl AvailabilityObserver for Member {
    fn on_available(&self, book: &Book) {
        info!(member = %self.id, book = %book.id, "{}, {} is available again", self.name, book.title);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of availability observers
#[derive(Default)]
pub struct AvailabilityNotifier {
    observers: Vec<(SubscriptionId, Box<dyn AvailabilityObserver>)>,
    next_id: u64,
}

impl std::fmt::Debug for AvailabilityNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl AvailabilityNotifier {
    /// Create a notifier with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer; it is called after all earlier subscribers
    pub fn subscribe(&mut self, observer: Box<dyn AvailabilityObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.observers.iter().position(|(sid, _)| *sid == id) {
            Some(pos) => {
                self.observers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Tell every observer that `book` is available
    pub fn notify(&self, book: &Book) {
        for (_, observer) in &self.observers {
            observer.on_available(book);
        }
    }

    /// Number of subscribed observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
