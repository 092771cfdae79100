use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::books::{Book, BookId};
use crate::core::library::LibraryResult;
use crate::library::domain::Library;
use crate::loans::{Loan, LoanId};
use crate::users::{User, UserId};

// SharedLibrary lets several callers work on one library. Every operation runs under a
// single lock, so the availability check and the flip of the flag happen as one step.
#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<Library>>,
}

impl SharedLibrary {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(Mutex::new(library)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_book(&self, book: Book) -> LibraryResult<BookId> {
        self.with(|library| library.add_book(book))
    }

    pub fn add_user(&self, user: Arc<dyn User>) -> LibraryResult<UserId> {
        self.with(|library| library.add_user(user))
    }

    pub fn issue_loan(&self, book: BookId, reader: UserId) -> LibraryResult<LoanId> {
        self.with(|library| library.issue_loan(book, reader))
    }

    pub fn return_book(&self, loan: LoanId) -> LibraryResult<()> {
        self.with(|library| library.return_book(loan))
    }

    pub fn loan(&self, loan: LoanId) -> LibraryResult<Loan> {
        self.with(|library| library.loan(loan).cloned())
    }

    pub fn is_book_available(&self, book: BookId) -> LibraryResult<bool> {
        self.with(|library| library.book(book).map(Book::is_available))
    }

    pub fn loan_count(&self) -> usize {
        self.with(|library| library.loan_count())
    }

    // a panic in another caller leaves the library in a consistent state, since every
    // operation validates before it mutates
    fn lock(&self) -> MutexGuard<'_, Library> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
