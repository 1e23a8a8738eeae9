//! libris - library catalog simulation
//!
//! Books, members and loans around a borrow/return workflow.
//!
//! # Architecture
//!
//! The catalog is the single owner of books and members and the only place
//! where lending state changes:
//! - A book's availability is one state machine (Available <-> Borrowed)
//! - Borrowing produces a `Loan` and records it in the catalog's ledger
//! - Returning closes that loan and notifies availability observers
//!
//! # Modules
//!
//! - `domain`: Data structures (Book, Member, Loan, BookEvent)
//! - `library`: The catalog registry, search strategies, notifications
//! - `core`: Loan commands and the loan review chain
//! - `adapters`: Search backends, including the legacy index adapter
//! - `config`: Loan policy configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```
//! use libris::{BookFactory, Catalog, Member};
//!
//! let mut catalog = Catalog::new();
//! let book = BookFactory::new().create_book("1984", "George Orwell", "123456789");
//! let member = Member::new("Alice", "001");
//! let (book_id, member_id) = (book.id, member.id.clone());
//!
//! catalog.add_book(book);
//! catalog.register_member(member);
//!
//! let loan = catalog.borrow_book(&book_id, &member_id).unwrap();
//! assert!(catalog.borrow_book(&book_id, &member_id).is_err());
//! catalog.return_book(&book_id, &member_id).unwrap();
//! assert_eq!(loan.due_at - loan.borrowed_at, chrono::Duration::days(14));
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use config::LoanPolicy;
pub use crate::core::{LoanCommand, LoanFinding, LoanReview};
pub use domain::{Book, BookEvent, BookFactory, BookId, BookState, Loan, LoanStatus, Member, MemberId};
pub use library::{Catalog, CatalogError};
