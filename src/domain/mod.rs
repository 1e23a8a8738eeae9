//! Domain types for the library catalog.
//!
//! This module contains the core data structures:
//! - Book: catalog entry with its availability state machine
//! - Member: registered borrower
//! - Loan: record of one lending
//! - Events: lending events that drive book state

pub mod book;
pub mod display;
pub mod events;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookFactory, BookId, BookState};
pub use display::{LabeledBook, TitleDisplay};
pub use events::BookEvent;
pub use loan::{Loan, LoanStatus};
pub use member::{Member, MemberId};
