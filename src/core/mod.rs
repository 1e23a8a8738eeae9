//! Lending workflow built on top of the catalog.
//!
//! This module contains:
//! - Command: borrow/return requests as data
//! - Review: ordered chain of loan checks (late returns, overdue loans)

pub mod command;
pub mod review;

// Re-export commonly used types
pub use command::LoanCommand;
pub use review::{late_return, still_overdue, LoanCheck, LoanFinding, LoanReview};
