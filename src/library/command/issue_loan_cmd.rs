use serde::{Deserialize, Serialize};
use crate::books::BookId;
use crate::core::command::{Command, CommandError};
use crate::library::shared::SharedLibrary;
use crate::loans::Loan;
use crate::users::UserId;

pub struct IssueLoanCommand {
    library: SharedLibrary,
}

impl IssueLoanCommand {
    pub fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueLoanCommandRequest {
    book_id: BookId,
    reader_id: UserId,
}

impl IssueLoanCommandRequest {
    pub fn new(book_id: BookId, reader_id: UserId) -> Self {
        Self {
            book_id,
            reader_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueLoanCommandResponse {
    pub loan: Loan,
}

impl IssueLoanCommandResponse {
    pub fn new(loan: Loan) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<IssueLoanCommandRequest, IssueLoanCommandResponse> for IssueLoanCommand {
    fn execute(&self, req: IssueLoanCommandRequest) -> Result<IssueLoanCommandResponse, CommandError> {
        self.library.with(|library| {
            let loan_id = library.issue_loan(req.book_id, req.reader_id)?;
            library.loan(loan_id).cloned()
        }).map_err(CommandError::from).map(IssueLoanCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::Book;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::command::issue_loan_cmd::{IssueLoanCommand, IssueLoanCommandRequest};
    use crate::library::factory::create_shared_library;
    use crate::users::Reader;

    #[test]
    fn test_should_run_issue_loan() {
        let library = create_shared_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let book = library.add_book(Book::new("Война и мир", "978-5-17-118366-1", 1869)).expect("should add book");
        let reader = library.add_user(Arc::new(Reader::new(1, "Иван Иванов", "ivan@example.com"))).expect("should add reader");
        let cmd = IssueLoanCommand::new(library.clone());

        let res = cmd.execute(IssueLoanCommandRequest::new(book, reader)).expect("should issue loan");
        assert_eq!(book, res.loan.book());
        assert_eq!(reader, res.loan.reader());
        assert_eq!(LoanStatus::CheckedOut, res.loan.status());

        let err = cmd.execute(IssueLoanCommandRequest::new(book, reader)).unwrap_err();
        assert!(matches!(err, CommandError::Unavailable { retryable: true, .. }));
        assert_eq!(1, library.loan_count());
    }
}
