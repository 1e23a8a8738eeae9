//! Loan review: an ordered chain of independent checks.
//!
//! Each check looks at one loan and may report a finding. Every check in
//! the chain runs, in order, regardless of what earlier checks reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Loan;

/// A single check in the review chain
pub type LoanCheck = fn(&Loan, DateTime<Utc>) -> Option<LoanFinding>;

/// Something a check found wrong with a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LoanFinding {
    /// The book came back after its due date; a late fee applies
    LateReturn { days_late: i64 },

    /// The book is still out past its due date
    Overdue { days_overdue: i64 },
}

impl std::fmt::Display for LoanFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanFinding::LateReturn { days_late } => {
                write!(f, "returned {} day(s) late, late fee required", days_late)
            }
            LoanFinding::Overdue { days_overdue } => {
                write!(f, "still out, {} day(s) overdue", days_overdue)
            }
        }
    }
}

/// Reports a recorded return that happened after the due date.
///
/// Open loans produce nothing here.
pub fn late_return(loan: &Loan, now: DateTime<Utc>) -> Option<LoanFinding> {
    loan.returned_late().then(|| LoanFinding::LateReturn {
        days_late: loan.days_late(now),
    })
}

/// Reports an open loan whose due date has passed
pub fn still_overdue(loan: &Loan, now: DateTime<Utc>) -> Option<LoanFinding> {
    (loan.is_open() && loan.is_overdue_at(now)).then(|| LoanFinding::Overdue {
        days_overdue: loan.days_late(now),
    })
}

/// Ordered list of loan checks
#[derive(Clone)]
pub struct LoanReview {
    checks: Vec<LoanCheck>,
}

impl std::fmt::Debug for LoanReview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoanReview")
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl Default for LoanReview {
    fn default() -> Self {
        Self::new().with_check(late_return).with_check(still_overdue)
    }
}

impl LoanReview {
    /// Create an empty chain
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check (builder form)
    pub fn with_check(mut self, check: LoanCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Append a check to the end of the chain
    pub fn push(&mut self, check: LoanCheck) {
        self.checks.push(check);
    }

    /// Number of checks in the chain
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the chain has no checks
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check against `loan` and collect what they report
    pub fn review(&self, loan: &Loan, now: DateTime<Utc>) -> Vec<LoanFinding> {
        let findings: Vec<_> = self
            .checks
            .iter()
            .filter_map(|check| check(loan, now))
            .collect();

        for finding in &findings {
            warn!(loan = %loan.id, member = %loan.member, "{}: {}", loan.title, finding);
        }

        findings
    }
}
