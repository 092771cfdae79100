use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::core::notice::Notice;
use crate::users::domain::User;

// Reader is a patron who borrows books
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Reader {
    id: i64,
    name: String,
    email: String,
}

impl Reader {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    // borrow_notice describes a reader-initiated loan. The loan itself is opened by
    // Library::borrow_book, which applies the same availability guard as issue_loan.
    pub fn borrow_notice(&self, book: &Book) -> Notice {
        Notice::BookBorrowed { book: book.book_info(), reader: self.name.to_string() }
    }
}

impl Identifiable for Reader {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl User for Reader {
    fn user_id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }

    fn role(&self) -> Role {
        Role::Reader
    }

    fn login(&self) -> Notice {
        Notice::LoggedIn { role: Role::Reader, name: self.name.to_string() }
    }

    fn role_action(&self) -> &'static str {
        "borrow_book"
    }

    fn as_reader(&self) -> Option<&Reader> {
        Some(self)
    }
}

// Librarian is a staff member who announces catalog additions
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Librarian {
    id: i64,
    name: String,
    email: String,
}

impl Librarian {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    // add_book only announces the book; Library::add_book is what changes the catalog.
    pub fn add_book(&self, book: &Book) -> Notice {
        Notice::BookAnnounced { book: book.book_info(), librarian: self.name.to_string() }
    }
}

impl Identifiable for Librarian {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl User for Librarian {
    fn user_id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }

    fn role(&self) -> Role {
        Role::Librarian
    }

    fn login(&self) -> Notice {
        Notice::LoggedIn { role: Role::Librarian, name: self.name.to_string() }
    }

    fn role_action(&self) -> &'static str {
        "add_book"
    }

    fn as_librarian(&self) -> Option<&Librarian> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::Book;
    use crate::core::library::Role;
    use crate::core::notice::Notice;
    use crate::users::domain::User;
    use crate::users::domain::model::{Librarian, Reader};

    #[test]
    fn test_should_build_reader() {
        let reader = Reader::new(1, "Иван Иванов", "ivan@example.com");
        assert_eq!(1, reader.user_id());
        assert_eq!("Иван Иванов", reader.name());
        assert_eq!("ivan@example.com", reader.email());
        assert_eq!(Role::Reader, reader.role());
        assert!(reader.as_reader().is_some());
        assert!(reader.as_librarian().is_none());
    }

    #[test]
    fn test_should_login_by_role() {
        let users: Vec<Arc<dyn User>> = vec![
            Arc::new(Reader::new(1, "Иван Иванов", "ivan@example.com")),
            Arc::new(Librarian::new(2, "Анна Петрова", "anna@example.com")),
        ];
        let notices: Vec<Notice> = users.iter().map(|u| u.login()).collect();
        assert_eq!(Notice::LoggedIn { role: Role::Reader, name: "Иван Иванов".to_string() }, notices[0]);
        assert_eq!(Notice::LoggedIn { role: Role::Librarian, name: "Анна Петрова".to_string() }, notices[1]);
        assert_eq!("borrow_book", users[0].role_action());
        assert_eq!("add_book", users[1].role_action());
    }

    #[test]
    fn test_should_announce_without_touching_book() {
        let librarian = Librarian::new(2, "Анна Петрова", "anna@example.com");
        let book = Book::new("Война и мир", "978-5-17-118366-1", 1869);
        let notice = librarian.add_book(&book);
        assert_eq!(Some("Анна Петрова"), notice.actor());
        assert_eq!(Some(book.book_info().as_str()), notice.book());
        assert!(book.is_available());
    }

    #[test]
    fn test_should_summarize_user() {
        let librarian = Librarian::new(2, "Анна Петрова", "anna@example.com");
        let summary = librarian.summary();
        assert_eq!(2, summary.id);
        assert_eq!(Role::Librarian, summary.role);
        assert_eq!("anna@example.com", summary.email.as_str());
    }
}
