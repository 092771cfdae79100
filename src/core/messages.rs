use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, Role};
use crate::core::notice::Notice;

// Locale selects the wording of console lines. Russian is the wording the library
// has always used at the front desk.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Russian,
    English,
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "en" | "english" => Locale::English,
            _ => Locale::Russian,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Locale::Russian => write!(f, "ru"),
            Locale::English => write!(f, "en"),
        }
    }
}

impl Locale {
    pub fn render(&self, notice: &Notice) -> String {
        match self {
            Locale::Russian => match notice {
                Notice::LoggedIn { role: Role::Reader, name } => {
                    format!("Читатель {} вошел в систему.", name)
                }
                Notice::LoggedIn { role: Role::Librarian, name } => {
                    format!("Библиотекарь {} вошел в систему.", name)
                }
                Notice::BookAnnounced { book, librarian } => {
                    format!("Книга \"{}\" добавлена библиотекарем {}.", book, librarian)
                }
                Notice::BookBorrowed { book, reader } => {
                    format!("Книга \"{}\" выдана читателю {}.", book, reader)
                }
                Notice::LoanIssued { book, reader } => {
                    format!("Книга \"{}\" выдана {}.", book, reader)
                }
                Notice::BookReturned { book } => {
                    format!("Книга \"{}\" возвращена.", book)
                }
            },
            Locale::English => match notice {
                Notice::LoggedIn { role: Role::Reader, name } => {
                    format!("Reader {} logged in.", name)
                }
                Notice::LoggedIn { role: Role::Librarian, name } => {
                    format!("Librarian {} logged in.", name)
                }
                Notice::BookAnnounced { book, librarian } => {
                    format!("Book \"{}\" added by librarian {}.", book, librarian)
                }
                Notice::BookBorrowed { book, reader } => {
                    format!("Book \"{}\" borrowed by reader {}.", book, reader)
                }
                Notice::LoanIssued { book, reader } => {
                    format!("Book \"{}\" issued to {}.", book, reader)
                }
                Notice::BookReturned { book } => {
                    format!("Book \"{}\" returned.", book)
                }
            },
        }
    }

    pub fn render_error(&self, err: &LibraryError) -> String {
        if err.is_unavailable_for_loan() {
            return match self {
                Locale::Russian => "Книга недоступна для выдачи".to_string(),
                Locale::English => "Book is not available for loan".to_string(),
            };
        }
        err.to_string()
    }
}
