use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::shared::SharedLibrary;
use crate::loans::{Loan, LoanId};

pub struct ReturnBookCommand {
    library: SharedLibrary,
}

impl ReturnBookCommand {
    pub fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    loan_id: LoanId,
}

impl ReturnBookCommandRequest {
    pub fn new(loan_id: LoanId) -> Self {
        Self {
            loan_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: Loan,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: Loan) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library.with(|library| {
            library.return_book(req.loan_id)?;
            library.loan(req.loan_id).cloned()
        }).map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
