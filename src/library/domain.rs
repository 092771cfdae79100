pub mod service;

pub use service::Library;
