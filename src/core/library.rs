use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub const UNAVAILABLE_FOR_LOAN: &str = "book unavailable for loan";

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Raised when a loan targets a book that is already out. It is retryable because the
    // book becomes available again as soon as the open loan is returned.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn unavailable_for_loan(isbn: &str) -> LibraryError {
        LibraryError::unavailable(UNAVAILABLE_FOR_LOAN, Some(isbn.to_string()), true)
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }

    pub fn is_unavailable_for_loan(&self) -> bool {
        matches!(self, LibraryError::CurrentlyUnavailable { message, .. } if message == UNAVAILABLE_FOR_LOAN)
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, .. } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Validation { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    Reader,
    Librarian,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Reader" => Role::Reader,
            "Librarian" => Role::Librarian,
            _ => Role::Reader,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Reader => write!(f, "Reader"),
            Role::Librarian => write!(f, "Librarian"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    CheckedOut,
    Returned,
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::CheckedOut => write!(f, "CheckedOut"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, LoanStatus, Role, UNAVAILABLE_FOR_LOAN};

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_unavailable_for_loan_error() {
        let err = LibraryError::unavailable_for_loan("978-5-17-118366-1");
        assert!(err.is_unavailable_for_loan());
        assert!(err.retryable());
        assert_eq!(format!("{} (978-5-17-118366-1)", UNAVAILABLE_FOR_LOAN), err.to_string());
    }

    #[test]
    fn test_should_not_treat_other_unavailable_as_loan_error() {
        let err = LibraryError::unavailable("branch closed", None, false);
        assert!(!err.is_unavailable_for_loan());
        assert!(!err.retryable());
    }

    #[test]
    fn test_should_create_validation_error() {
        let err = LibraryError::validation("test", None);
        assert!(matches!(err, LibraryError::Validation{ message: _, reason_code: _ }));
        assert!(!err.retryable());
        assert_eq!("test", err.to_string());
    }

    #[test]
    fn test_should_convert_serde_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(parse_err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = LibraryError::from(io_err);
        assert!(matches!(err, LibraryError::Runtime{ message: _, reason_code: None }));
        assert!(!err.retryable());
    }

    #[test]
    fn test_should_parse_role() {
        assert_eq!(Role::Librarian, Role::from("Librarian".to_string()));
        assert_eq!(Role::Reader, Role::from("Reader".to_string()));
        assert_eq!(Role::Reader, Role::from("unknown".to_string()));
        assert_eq!("Librarian", Role::Librarian.to_string());
    }

    #[test]
    fn test_should_display_loan_status() {
        assert_eq!("CheckedOut", LoanStatus::CheckedOut.to_string());
        assert_eq!("Returned", LoanStatus::Returned.to_string());
    }
}
