//! Library loans: a catalog of books, a registry of readers and librarians, and the loan
//! history that ties them together.
//!
//! The [`library::Library`] aggregate owns all three collections and is the only place a
//! loan can be opened, which keeps a book's availability flag in step with its open loan.
//! Domain operations publish [`core::events::DomainEvent`]s instead of printing; the
//! [`gateway`] publishers decide whether those end up on the console, in the log, or in
//! memory.

pub mod books;
pub mod core;
pub mod gateway;
pub mod library;
pub mod loans;
pub mod users;
pub mod utils;
