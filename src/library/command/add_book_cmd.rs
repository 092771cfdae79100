use serde::{Deserialize, Serialize};
use crate::books::{Book, BookId};
use crate::core::command::{Command, CommandError};
use crate::library::shared::SharedLibrary;

pub struct AddBookCommand {
    library: SharedLibrary,
}

impl AddBookCommand {
    pub fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    title: String,
    isbn: String,
    publication_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            isbn: isbn.to_string(),
            publication_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book_id: BookId,
}

impl AddBookCommandResponse {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = Book::new(req.title.as_str(), req.isbn.as_str(), req.publication_year);
        self.library.add_book(book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
