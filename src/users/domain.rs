use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::core::notice::Notice;
use crate::users::domain::model::{Librarian, Reader};

pub mod model;

// User is the capability every registered person offers to the library. Callers work with
// `dyn User` and reach the role-specific side through as_reader/as_librarian.
pub trait User: Identifiable + Debug {
    fn user_id(&self) -> i64;
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn role(&self) -> Role;
    fn login(&self) -> Notice;
    // short name of the action that distinguishes this role
    fn role_action(&self) -> &'static str;

    fn as_reader(&self) -> Option<&Reader> {
        None
    }

    fn as_librarian(&self) -> Option<&Librarian> {
        None
    }

    fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id(),
            name: self.name().to_string(),
            email: self.email().to_string(),
            role: self.role(),
        }
    }
}

// UserSummary is the serializable view of a user carried in domain events
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// UserId is a stable handle into the library's user registry. It is distinct from the
// caller-assigned numeric id, which is not guaranteed to be unique.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub struct UserId(usize);

impl UserId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "user#{}", self.0)
    }
}
