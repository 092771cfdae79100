use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info, warn};
use crate::books::{Book, BookId};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::notice::Notice;
use crate::gateway::events::EventPublisher;
use crate::loans::{Loan, LoanId};
use crate::users::{User, UserId};

// Which desk a loan was opened from. Both go through the same guard and both record a
// loan; they only differ in the notice that is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoanPath {
    Desk,
    Reader,
}

/// Library is the aggregate root of the catalog, the user registry and the loan history.
///
/// Books, users and loans are kept in append-only collections and addressed by the
/// handles returned when they were added. A book is unavailable exactly while the most
/// recent loan referencing it is open.
pub struct Library {
    config: Configuration,
    books: Vec<Book>,
    users: Vec<Arc<dyn User>>,
    loans: Vec<Loan>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Debug for Library {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("config", &self.config)
            .field("books", &self.books)
            .field("users", &self.users)
            .field("loans", &self.loans)
            .finish()
    }
}

impl Library {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            books: Vec::new(),
            users: Vec::new(),
            loans: Vec::new(),
            events_publisher,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Stores a book in the catalog. Duplicate isbns are accepted unless the configuration
    /// enforces unique keys.
    pub fn add_book(&mut self, book: Book) -> LibraryResult<BookId> {
        if self.config.enforce_unique_keys && self.books.iter().any(|b| b.isbn() == book.isbn()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} is already in the catalog", book.isbn()).as_str()));
        }
        let event = DomainEvent::added(
            "book_added", "books", book.id().as_str(), &self.metadata(), None, &book)?;
        let book_id = BookId::new(self.books.len());
        debug!(book_id = %book_id, isbn = %book.isbn(), "adding book to catalog");
        self.books.push(book);
        self.publish(&event);
        Ok(book_id)
    }

    /// Registers a reader or librarian. Duplicate ids and emails are accepted unless the
    /// configuration enforces unique keys.
    pub fn add_user(&mut self, user: Arc<dyn User>) -> LibraryResult<UserId> {
        if self.config.enforce_unique_keys {
            if let Some(existing) = self.users.iter()
                .find(|u| u.user_id() == user.user_id() || u.email() == user.email()) {
                return Err(LibraryError::duplicate_key(
                    format!("user {} <{}> is already registered", existing.user_id(), existing.email()).as_str()));
            }
        }
        let event = DomainEvent::added(
            "user_added", "users", user.id().as_str(), &self.metadata(), None, &user.summary())?;
        let user_id = UserId::new(self.users.len());
        debug!(user_id = %user_id, role = %user.role(), action = user.role_action(), "registering user");
        self.users.push(user);
        self.publish(&event);
        Ok(user_id)
    }

    pub fn login(&self, user: UserId) -> LibraryResult<()> {
        let user = self.user(user)?;
        let event = DomainEvent::announced(
            "user_login", "users", user.id().as_str(), &self.metadata(), user.login())?;
        self.publish(&event);
        Ok(())
    }

    /// Publishes a librarian's announcement of a catalog book. The catalog itself is not
    /// changed.
    pub fn announce_book(&self, librarian: UserId, book: BookId) -> LibraryResult<()> {
        let user = self.user(librarian)?;
        let librarian = user.as_librarian().ok_or_else(|| LibraryError::validation(
            format!("{} is not a librarian", user.name()).as_str(), Some(user.id())))?;
        let book = self.book(book)?;
        let event = DomainEvent::announced(
            "book_announced", "books", book.id().as_str(), &self.metadata(), librarian.add_book(book))?;
        self.publish(&event);
        Ok(())
    }

    /// Opens a loan of `book` to `reader` and marks the book unavailable.
    ///
    /// Fails with `CurrentlyUnavailable` when the book is already out, in which case
    /// neither the book nor the loan history changes.
    pub fn issue_loan(&mut self, book: BookId, reader: UserId) -> LibraryResult<LoanId> {
        self.open_loan(book, reader, LoanPath::Desk)
    }

    // reader-initiated borrowing, recorded exactly like a desk loan
    pub fn borrow_book(&mut self, reader: UserId, book: BookId) -> LibraryResult<LoanId> {
        self.open_loan(book, reader, LoanPath::Reader)
    }

    /// Closes a loan and marks its book available again.
    ///
    /// With strict returns a second return of the same loan fails with `Validation`;
    /// otherwise it refreshes the return date and republishes the return. A repeated
    /// return never releases a book that a newer loan still holds.
    pub fn return_book(&mut self, loan_id: LoanId) -> LibraryResult<()> {
        let loan = self.loan(loan_id)?;
        let book_id = loan.book();
        if loan.is_returned() {
            if self.config.strict_returns {
                warn!(loan_id = %loan_id, "loan already returned");
                return Err(LibraryError::validation(
                    format!("{} is already returned", loan_id).as_str(), Some(loan.id())));
            }
            debug!(loan_id = %loan_id, "returning a closed loan again");
        }
        let release = !loan.is_returned() || self.open_loan_for_book(book_id).is_none();
        let notice = Notice::BookReturned { book: self.book(book_id)?.book_info() };
        let mut closed = loan.clone();
        closed.mark_returned(Utc::now().naive_utc());
        let event = DomainEvent::updated(
            "loan_returned", "loans", closed.id().as_str(), &self.metadata(), Some(notice), &closed)?;

        if release {
            self.book_mut(book_id)?.change_availability_status(true);
        } else {
            warn!(loan_id = %loan_id, book_id = %book_id, "book is out on a newer loan, availability kept");
        }
        if let Some(entry) = self.loans.get_mut(loan_id.index()) {
            *entry = closed;
        }
        info!(loan_id = %loan_id, book_id = %book_id, "book returned");
        self.publish(&event);
        Ok(())
    }

    // Manual override of a catalog book's flag. It bypasses the loan history, so callers
    // that use it take over responsibility for the availability invariant.
    pub fn change_availability_status(&mut self, book: BookId, status: bool) -> LibraryResult<()> {
        debug!(book_id = %book, status, "overriding availability");
        self.book_mut(book)?.change_availability_status(status);
        Ok(())
    }

    pub fn book(&self, book: BookId) -> LibraryResult<&Book> {
        self.books.get(book.index())
            .ok_or_else(|| LibraryError::not_found(format!("{} not found", book).as_str()))
    }

    pub fn user(&self, user: UserId) -> LibraryResult<&Arc<dyn User>> {
        self.users.get(user.index())
            .ok_or_else(|| LibraryError::not_found(format!("{} not found", user).as_str()))
    }

    pub fn loan(&self, loan: LoanId) -> LibraryResult<&Loan> {
        self.loans.get(loan.index())
            .ok_or_else(|| LibraryError::not_found(format!("{} not found", loan).as_str()))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[Arc<dyn User>] {
        &self.users
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    pub fn loans_for_book(&self, book: BookId) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.book() == book).collect()
    }

    pub fn loans_for_reader(&self, reader: UserId) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.reader() == reader).collect()
    }

    pub fn open_loan_for_book(&self, book: BookId) -> Option<&Loan> {
        self.loans.iter().rev().find(|l| l.book() == book && !l.is_returned())
    }

    fn open_loan(&mut self, book_id: BookId, reader_id: UserId, path: LoanPath) -> LibraryResult<LoanId> {
        let user = self.user(reader_id)?;
        let reader = user.as_reader().ok_or_else(|| LibraryError::validation(
            format!("{} is not a reader", user.name()).as_str(), Some(user.id())))?;
        let book = self.book(book_id)?;
        if !book.is_available() {
            warn!(book_id = %book_id, isbn = %book.isbn(), reader_id = %reader_id, "book unavailable for loan");
            return Err(LibraryError::unavailable_for_loan(book.isbn()));
        }
        let notice = match path {
            LoanPath::Desk => Notice::LoanIssued { book: book.book_info(), reader: reader.name().to_string() },
            LoanPath::Reader => reader.borrow_notice(book),
        };
        let loan_id = LoanId::new(self.loans.len());
        let loan = Loan::new(loan_id, book_id, reader_id);
        let event = DomainEvent::added(
            "loan_issued", "loans", loan.id().as_str(), &self.metadata(), Some(notice), &loan)?;

        self.book_mut(book_id)?.change_availability_status(false);
        self.loans.push(loan);
        info!(loan_id = %loan_id, book_id = %book_id, reader_id = %reader_id, path = ?path, "loan issued");
        self.publish(&event);
        Ok(loan_id)
    }

    fn book_mut(&mut self, book: BookId) -> LibraryResult<&mut Book> {
        self.books.get_mut(book.index())
            .ok_or_else(|| LibraryError::not_found(format!("{} not found", book).as_str()))
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.config.branch_id.to_string())])
    }

    fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!(event_id = %event.event_id, name = %event.name, error = %err, "failed to publish event");
        }
    }
}
