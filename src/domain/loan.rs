//! Loan records.
//!
//! A loan refers to its book and member by id only; it never owns them.
//! It starts open and is closed once, when the book comes back.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::{Book, BookId};
use super::member::MemberId;

/// One book lent to one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for this loan
    pub id: Uuid,

    /// The lent book
    pub book: BookId,

    /// Title of the book at the time of lending
    pub title: String,

    /// The borrowing member
    pub member: MemberId,

    /// When the book was taken out
    pub borrowed_at: DateTime<Utc>,

    /// When the book is due back
    pub due_at: DateTime<Utc>,

    /// When the book came back (unset while the loan is open)
    returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Create an open loan with explicit timestamps
    pub fn new(
        book: &Book,
        member: MemberId,
        borrowed_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            book: book.id,
            title: book.title.clone(),
            member,
            borrowed_at,
            due_at,
            returned_at: None,
        }
    }

    /// Create an open loan due `period` after `borrowed_at`
    pub fn starting_at(
        book: &Book,
        member: MemberId,
        borrowed_at: DateTime<Utc>,
        period: Duration,
    ) -> Self {
        Self::new(book, member, borrowed_at, borrowed_at + period)
    }

    /// When the book came back, if it has
    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }

    /// Current lifecycle status
    pub fn status(&self) -> LoanStatus {
        if self.returned_at.is_some() {
            LoanStatus::Closed
        } else {
            LoanStatus::Open
        }
    }

    /// Check if the book is still out
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Record the return. A closed loan keeps its first return time.
    pub fn close(&mut self, at: DateTime<Utc>) -> bool {
        if self.returned_at.is_some() {
            return false;
        }
        self.returned_at = Some(at);
        true
    }

    /// Check if a recorded return happened after the due date
    pub fn returned_late(&self) -> bool {
        self.returned_at
            .map(|returned| returned > self.due_at)
            .unwrap_or(false)
    }

    /// Check if the loan is overdue as of `now`.
    ///
    /// Closed loans are overdue if they came back late; open loans are
    /// overdue once `now` passes the due date.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match self.returned_at {
            Some(_) => self.returned_late(),
            None => now > self.due_at,
        }
    }

    /// Check if the loan is overdue right now
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// Whole days past the due date, measured at the return time for closed
    /// loans and at `now` for open ones. Zero when not late.
    pub fn days_late(&self, now: DateTime<Utc>) -> i64 {
        let reference = self.returned_at.unwrap_or(now);
        (reference - self.due_at).num_days().max(0)
    }
}

/// Lifecycle of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Book not yet returned
    Open,

    /// Book returned
    Closed,
}
