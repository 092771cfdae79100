use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book abstracts a single catalog entry. A title is held as exactly one copy, so the
// availability flag is the whole of its circulation state.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    isbn: String,
    publication_year: i32,
    available: bool,
}

impl Book {
    pub fn new(title: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            isbn: isbn.to_string(),
            publication_year,
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn change_availability_status(&mut self, status: bool) {
        self.available = status;
    }

    pub fn book_info(&self) -> String {
        format!("Title: {}, ISBN: {}, Year: {}", self.title, self.isbn, self.publication_year)
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.book_info())
    }
}
