//! Lending events that drive a book's availability state.

use serde::{Deserialize, Serialize};

/// Events that can move a book between availability states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookEvent {
    /// A member takes the book out
    Borrow,

    /// The book comes back to the shelf
    Return,
}

impl std::fmt::Display for BookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookEvent::Borrow => write!(f, "borrow"),
            BookEvent::Return => write!(f, "return"),
        }
    }
}
