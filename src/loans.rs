pub mod domain;

pub use domain::LoanId;
pub use domain::model::Loan;
