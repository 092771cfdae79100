pub mod command;
pub mod domain;
pub mod factory;
pub mod shared;

pub use domain::Library;
pub use shared::SharedLibrary;
