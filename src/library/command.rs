pub mod add_book_cmd;
pub mod add_user_cmd;
pub mod issue_loan_cmd;
pub mod return_book_cmd;
