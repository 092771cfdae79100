use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::BookId;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::loans::domain::LoanId;
use crate::users::UserId;
use crate::utils::date::{option_serializer, serializer};

// Loan binds one catalog book to one reader. Loans are only opened by the library, which
// flips the book unavailable in the same step, and are kept after return as history.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    loan_id: LoanId,
    reference: Uuid,
    book: BookId,
    reader: UserId,
    status: LoanStatus,
    #[serde(with = "serializer")]
    loan_date: NaiveDateTime,
    #[serde(with = "option_serializer")]
    return_date: Option<NaiveDateTime>,
}

impl Loan {
    pub(crate) fn new(loan_id: LoanId, book: BookId, reader: UserId) -> Self {
        Self {
            loan_id,
            reference: Uuid::new_v4(),
            book,
            reader,
            status: LoanStatus::CheckedOut,
            loan_date: Utc::now().naive_utc(),
            return_date: None,
        }
    }

    pub(crate) fn mark_returned(&mut self, at: NaiveDateTime) {
        self.status = LoanStatus::Returned;
        self.return_date = Some(at);
    }

    pub fn loan_id(&self) -> LoanId {
        self.loan_id
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn reader(&self) -> UserId {
        self.reader
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn loan_date(&self) -> NaiveDateTime {
        self.loan_date
    }

    pub fn return_date(&self) -> Option<NaiveDateTime> {
        self.return_date
    }

    pub fn is_returned(&self) -> bool {
        self.status == LoanStatus::Returned
    }
}

impl Identifiable for Loan {
    fn id(&self) -> String {
        self.reference.to_string()
    }
}
