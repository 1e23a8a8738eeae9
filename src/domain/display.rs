//! Title decorations for presenting books.

use super::book::Book;

/// Something that can present a book title
pub trait TitleDisplay {
    /// Title as it should be shown
    fn display_title(&self) -> String;
}

impl TitleDisplay for Book {
    fn display_title(&self) -> String {
        self.title.clone()
    }
}

/// Wraps a title with a trailing label, e.g. "1984 - New Arrival".
///
/// Wrappers nest: a `LabeledBook` can decorate another `LabeledBook`.
#[derive(Debug, Clone)]
pub struct LabeledBook<'a, T: TitleDisplay + ?Sized = Book> {
    inner: &'a T,
    label: String,
}

impl<'a, T: TitleDisplay + ?Sized> LabeledBook<'a, T> {
    /// Decorate `inner` with `label`
    pub fn new(inner: &'a T, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    /// The label added by this decorator
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: TitleDisplay + ?Sized> TitleDisplay for LabeledBook<'_, T> {
    fn display_title(&self) -> String {
        format!("{} - {}", self.inner.display_title(), self.label)
    }
}
