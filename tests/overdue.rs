//! Overdue and Late Return Integration Tests
//!
//! Tests for loan review and overdue detection.

use chrono::{Duration, Utc};
use libris::core::{late_return, still_overdue};
use libris::{Book, Catalog, Loan, LoanFinding, LoanReview, LoanStatus, MemberId};

fn late_loan() -> Loan {
    let now = Utc::now();
    let book = Book::new("1984", "George Orwell", "123456789");
    Loan::new(
        &book,
        MemberId::new("001"),
        now - Duration::days(30),
        now - Duration::days(14),
    )
}

#[test]
fn test_late_check_without_return_does_not_panic() {
    let loan = late_loan();
    let now = Utc::now();

    assert_eq!(loan.status(), LoanStatus::Open);
    assert_eq!(late_return(&loan, now), None);
    assert!(loan.is_overdue_at(now));
    assert!(loan.is_overdue());
}

#[test]
fn test_late_check_after_return() {
    let mut loan = late_loan();
    let now = Utc::now();
    loan.close(now);

    assert!(loan.returned_late());
    assert!(matches!(
        late_return(&loan, now),
        Some(LoanFinding::LateReturn { days_late: 14 })
    ));
    assert_eq!(still_overdue(&loan, now), None);
}

#[test]
fn test_review_chain_over_lifecycle() {
    let review = LoanReview::default();
    let mut loan = late_loan();
    let now = Utc::now();

    let open = review.review(&loan, now);
    assert_eq!(open, vec![LoanFinding::Overdue { days_overdue: 14 }]);

    loan.close(now);
    let closed = review.review(&loan, now);
    assert_eq!(closed, vec![LoanFinding::LateReturn { days_late: 14 }]);
}

#[test]
fn test_catalog_return_feeds_review() {
    let mut catalog = Catalog::new();
    let book = Book::new("1984", "George Orwell", "123456789");
    let member = MemberId::new("001");
    catalog.add_book(book.clone());

    let start = Utc::now() - Duration::days(20);
    catalog.borrow_book_at(&book.id, &member, start).unwrap();
    let closed = catalog
        .return_book_at(&book.id, &member, start + Duration::days(17))
        .unwrap();

    assert!(closed.returned_late());
    assert_eq!(
        LoanReview::default().review(&closed, Utc::now()),
        vec![LoanFinding::LateReturn { days_late: 3 }]
    );
    assert_eq!(catalog.overdue_loans(Utc::now()).len(), 1);
}

#[test]
fn test_on_time_return_has_no_findings() {
    let mut catalog = Catalog::new();
    let book = Book::new("1984", "George Orwell", "123456789");
    let member = MemberId::new("001");
    catalog.add_book(book.clone());

    let start = Utc::now();
    catalog.borrow_book_at(&book.id, &member, start).unwrap();
    let closed = catalog
        .return_book_at(&book.id, &member, start + Duration::days(13))
        .unwrap();

    assert!(LoanReview::default()
        .review(&closed, start + Duration::days(60))
        .is_empty());
}
