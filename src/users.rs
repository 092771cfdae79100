pub mod domain;

pub use domain::{User, UserId, UserSummary};
pub use domain::model::{Librarian, Reader};
