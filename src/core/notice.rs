use serde::{Deserialize, Serialize};
use crate::core::library::Role;

// Notice describes something an actor did, without deciding how it is shown. Every variant
// carries the actor name (when there is one) and the book identity as rendered by book_info.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Notice {
    LoggedIn {
        role: Role,
        name: String,
    },
    BookAnnounced {
        book: String,
        librarian: String,
    },
    BookBorrowed {
        book: String,
        reader: String,
    },
    LoanIssued {
        book: String,
        reader: String,
    },
    BookReturned {
        book: String,
    },
}

impl Notice {
    pub fn actor(&self) -> Option<&str> {
        match self {
            Notice::LoggedIn { name, .. } => Some(name.as_str()),
            Notice::BookAnnounced { librarian, .. } => Some(librarian.as_str()),
            Notice::BookBorrowed { reader, .. } => Some(reader.as_str()),
            Notice::LoanIssued { reader, .. } => Some(reader.as_str()),
            Notice::BookReturned { .. } => None,
        }
    }

    pub fn book(&self) -> Option<&str> {
        match self {
            Notice::LoggedIn { .. } => None,
            Notice::BookAnnounced { book, .. } => Some(book.as_str()),
            Notice::BookBorrowed { book, .. } => Some(book.as_str()),
            Notice::LoanIssued { book, .. } => Some(book.as_str()),
            Notice::BookReturned { book } => Some(book.as_str()),
        }
    }
}
