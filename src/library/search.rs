//! Pluggable book search.

use crate::domain::Book;

/// Decides whether a book matches a keyword
pub type SearchStrategy = fn(&Book, &str) -> bool;

/// Case-insensitive substring match on the title
pub fn by_title(book: &Book, keyword: &str) -> bool {
    book.title.to_lowercase().contains(&keyword.to_lowercase())
}

/// Case-insensitive substring match on the author
pub fn by_author(book: &Book, keyword: &str) -> bool {
    book.author.to_lowercase().contains(&keyword.to_lowercase())
}

/// Exact ISBN match
pub fn by_isbn(book: &Book, keyword: &str) -> bool {
    book.isbn == keyword.trim()
}

/// Runs searches with a swappable strategy
#[derive(Clone, Copy)]
pub struct BookFinder {
    strategy: SearchStrategy,
}

impl std::fmt::Debug for BookFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookFinder").finish_non_exhaustive()
    }
}

impl Default for BookFinder {
    fn default() -> Self {
        Self::new(by_title)
    }
}

impl BookFinder {
    /// Create a finder using `strategy`
    pub fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    /// Replace the strategy
    pub fn set_strategy(&mut self, strategy: SearchStrategy) {
        self.strategy = strategy;
    }

    /// Books matching `keyword`, in the order given
    pub fn find<'a>(
        &self,
        books: impl IntoIterator<Item = &'a Book>,
        keyword: &str,
    ) -> Vec<&'a Book> {
        books
            .into_iter()
            .filter(|book| (self.strategy)(*book, keyword))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book> {
        vec![
            Book::new("1984", "George Orwell", "123456789"),
            Book::new("Animal Farm", "George Orwell", "987654321"),
            Book::new("Brave New World", "Aldous Huxley", "555"),
        ]
    }

    #[test]
    fn test_search_by_title() {
        let books = shelf();
        let finder = BookFinder::new(by_title);

        let results = finder.find(&books, "farm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Animal Farm");

        assert!(finder.find(&books, "python").is_empty());
    }

    #[test]
    fn test_switch_strategy() {
        let books = shelf();
        let mut finder = BookFinder::default();
        assert!(finder.find(&books, "orwell").is_empty());

        finder.set_strategy(by_author);
        let results = finder.find(&books, "ORWELL");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "1984");

        finder.set_strategy(by_isbn);
        assert_eq!(finder.find(&books, "555").len(), 1);
        assert!(finder.find(&books, "55").is_empty());
    }
}
