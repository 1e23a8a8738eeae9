//! The catalog: registry of books and members, and the only place where
//! lending state changes.
//!
//! Books handed to the catalog are owned by it. Callers refer to them by
//! `BookId` afterwards and only ever get shared references back, so every
//! state change goes through `borrow_book` / `return_book` and the loan
//! ledger stays in step with book states.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use super::notify::AvailabilityNotifier;
use super::search::{BookFinder, SearchStrategy};
use crate::config::LoanPolicy;
use crate::domain::{Book, BookId, Loan, Member, MemberId};

/// Catalog of all books and members known to one library
#[derive(Debug, Default)]
pub struct Catalog {
    /// Books in insertion order
    books: Vec<Book>,

    /// Members in registration order
    members: Vec<Member>,

    /// Every loan ever made, open and closed
    loans: Vec<Loan>,

    /// Lending rules
    policy: LoanPolicy,

    /// Observers told when a book becomes available again
    notifier: AvailabilityNotifier,
}

impl Catalog {
    /// Create a new empty catalog with the default loan policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty catalog with a specific loan policy
    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Lending rules in effect
    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Add a book to the catalog.
    ///
    /// Adding the same book twice is allowed; lookups and removals act on
    /// the first entry.
    pub fn add_book(&mut self, book: Book) {
        debug!(book = %book.id, title = %book.title, "Adding book");
        self.books.push(book);
    }

    /// Remove the first entry for a book.
    ///
    /// A book with an open loan stays in the catalog until it is returned.
    pub fn remove_book(&mut self, id: &BookId) -> Result<Book, CatalogError> {
        let pos = self
            .books
            .iter()
            .position(|b| &b.id == id)
            .ok_or(CatalogError::BookNotFound(*id))?;

        if let Some(loan) = self.open_loan(id) {
            return Err(CatalogError::OnLoan {
                book: *id,
                member: loan.member.clone(),
            });
        }

        debug!(book = %id, "Removing book");
        Ok(self.books.remove(pos))
    }

    /// Register a member
    pub fn register_member(&mut self, member: Member) {
        debug!(member = %member.id, name = %member.name, "Registering member");
        self.members.push(member);
    }

    /// Remove the first registration for a member
    pub fn remove_member(&mut self, id: &MemberId) -> Result<Member, CatalogError> {
        let pos = self
            .members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| CatalogError::MemberNotFound(id.clone()))?;

        debug!(member = %id, "Removing member");
        Ok(self.members.remove(pos))
    }

    /// Get a book by ID
    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// Get a member by ID
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Find the first book whose title matches exactly
    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Search books with the given strategy
    pub fn search(&self, strategy: SearchStrategy, keyword: &str) -> Vec<&Book> {
        BookFinder::new(strategy).find(&self.books, keyword)
    }

    /// Iterate over books in insertion order
    pub fn books(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Iterate over members in registration order
    pub fn members(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// All loans, oldest first
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// The open loan for a book, if it is out
    pub fn open_loan(&self, book: &BookId) -> Option<&Loan> {
        self.loans.iter().find(|l| &l.book == book && l.is_open())
    }

    /// Loans that are overdue as of `now` (late returns included)
    pub fn overdue_loans(&self, now: DateTime<Utc>) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.is_overdue_at(now)).collect()
    }

    /// Observers told when a book becomes available again
    pub fn notifier_mut(&mut self) -> &mut AvailabilityNotifier {
        &mut self.notifier
    }

    /// Lend a book to a member, starting now
    pub fn borrow_book(&mut self, book: &BookId, member: &MemberId) -> Result<Loan, CatalogError> {
        self.borrow_book_at(book, member, Utc::now())
    }

    /// Lend a book to a member, starting at `now`.
    ///
    /// The book must be in the catalog, available, and not referenced by an
    /// open loan in the ledger. The member is recorded as given; registration
    /// is not checked.
    pub fn borrow_book_at(
        &mut self,
        book: &BookId,
        member: &MemberId,
        now: DateTime<Utc>,
    ) -> Result<Loan, CatalogError> {
        let period = self.policy.loan_period();
        let on_loan = self.open_loan(book).is_some();
        let entry = self
            .books
            .iter_mut()
            .find(|b| &b.id == book)
            .ok_or(CatalogError::BookNotFound(*book))?;

        if on_loan || !entry.borrow() {
            debug!(book = %book, member = %member, "Book is already out");
            return Err(CatalogError::NotAvailable {
                book: *book,
                title: entry.title.clone(),
            });
        }

        let loan = Loan::starting_at(entry, member.clone(), now, period);
        info!(
            book = %book,
            member = %member,
            due = %loan.due_at,
            "Book borrowed: {}",
            loan.title
        );

        self.loans.push(loan.clone());
        Ok(loan)
    }

    /// Take a book back, now
    pub fn return_book(&mut self, book: &BookId, member: &MemberId) -> Result<Loan, CatalogError> {
        self.return_book_at(book, member, Utc::now())
    }

    /// Take a book back at `now`, closing its open loan.
    ///
    /// Under the default policy any member may return any book; with
    /// `strict_returns` only the borrower may. Observers are notified once
    /// the book is available again.
    pub fn return_book_at(
        &mut self,
        book: &BookId,
        member: &MemberId,
        now: DateTime<Utc>,
    ) -> Result<Loan, CatalogError> {
        let idx = self
            .books
            .iter()
            .position(|b| &b.id == book)
            .ok_or(CatalogError::BookNotFound(*book))?;

        let loan_idx = self.loans.iter().position(|l| &l.book == book && l.is_open());
        let Some(loan_idx) = loan_idx else {
            return Err(CatalogError::NotBorrowed {
                book: *book,
                title: self.books[idx].title.clone(),
            });
        };

        let borrower = &self.loans[loan_idx].member;
        if self.policy.strict_returns && borrower != member {
            return Err(CatalogError::NotBorrower {
                book: *book,
                borrower: borrower.clone(),
                member: member.clone(),
            });
        }

        let entry = &mut self.books[idx];
        if !entry.give_back() {
            return Err(CatalogError::NotBorrowed {
                book: *book,
                title: entry.title.clone(),
            });
        }

        let loan = &mut self.loans[loan_idx];
        loan.close(now);
        info!(book = %book, member = %member, late = loan.returned_late(), "Book returned: {}", loan.title);
        let loan = loan.clone();

        self.notifier.notify(&self.books[idx]);
        Ok(loan)
    }

    /// Get the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// Reasons a catalog operation did not happen.
///
/// None of these are fatal; the catalog is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Book not in catalog: {0}")]
    BookNotFound(BookId),

    #[error("Member not registered: {0}")]
    MemberNotFound(MemberId),

    #[error("Book is already on loan: {title} ({book})")]
    NotAvailable { book: BookId, title: String },

    #[error("Book is not on loan: {title} ({book})")]
    NotBorrowed { book: BookId, title: String },

    #[error("Book {book} cannot be removed while on loan to {member}")]
    OnLoan { book: BookId, member: MemberId },

    #[error("Book {book} is on loan to {borrower}, not {member}")]
    NotBorrower {
        book: BookId,
        borrower: MemberId,
        member: MemberId,
    },
}
