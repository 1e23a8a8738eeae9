//! Lending requests as data.
//!
//! A `LoanCommand` captures what to do so it can be queued, logged or
//! replayed, then runs against whichever catalog it is given.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BookId, Loan, MemberId};
use crate::library::{Catalog, CatalogError};

/// A borrow or return request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum LoanCommand {
    /// Lend `book` to `member`
    Borrow { book: BookId, member: MemberId },

    /// Take `book` back from `member`
    Return { book: BookId, member: MemberId },
}

impl LoanCommand {
    /// Run the request against `catalog`.
    ///
    /// Both variants yield the affected loan: the new one for a borrow, the
    /// closed one for a return.
    pub fn execute(&self, catalog: &mut Catalog) -> Result<Loan, CatalogError> {
        debug!(command = ?self, "Executing loan command");
        match self {
            LoanCommand::Borrow { book, member } => catalog.borrow_book(book, member),
            LoanCommand::Return { book, member } => catalog.return_book(book, member),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, Member};

    #[test]
    fn test_borrow_then_return() {
        let mut catalog = Catalog::new();
        let book = Book::new("1984", "George Orwell", "123456789");
        let member = Member::new("Alice", "001");
        let (book_id, member_id) = (book.id, member.id.clone());
        catalog.add_book(book);
        catalog.register_member(member);

        let borrow = LoanCommand::Borrow {
            book: book_id,
            member: member_id.clone(),
        };
        let loan = borrow.execute(&mut catalog).unwrap();
        assert!(loan.is_open());
        assert!(borrow.execute(&mut catalog).is_err());

        let give_back = LoanCommand::Return {
            book: book_id,
            member: member_id,
        };
        let closed = give_back.execute(&mut catalog).unwrap();
        assert_eq!(closed.id, loan.id);
        assert!(!closed.is_open());
    }

    #[test]
    fn test_command_serialization() {
        let command = LoanCommand::Return {
            book: BookId::new(),
            member: MemberId::new("001"),
        };

        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains("\"action\":\"return\""));

        let parsed: LoanCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, command);
    }
}
