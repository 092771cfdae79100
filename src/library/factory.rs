use tracing::debug;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::library::domain::Library;
use crate::library::shared::SharedLibrary;

pub fn create_library(config: &Configuration, via: GatewayPublisherVia) -> Library {
    debug!(branch_id = %config.branch_id, locale = %config.locale, via = ?via, "creating library");
    Library::new(config, create_publisher(config, via))
}

pub fn create_shared_library(config: &Configuration, via: GatewayPublisherVia) -> SharedLibrary {
    SharedLibrary::new(create_library(config, via))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::factory::{create_library, create_shared_library};

    #[test]
    fn test_should_create_empty_library() {
        let library = create_library(&Configuration::new("test"), GatewayPublisherVia::Log);
        assert_eq!("test", library.config().branch_id.as_str());
        assert!(library.books().is_empty());
        assert!(library.users().is_empty());
        assert_eq!(0, library.loan_count());
    }

    #[test]
    fn test_should_create_shared_library() {
        let shared = create_shared_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        assert_eq!(0, shared.loan_count());
    }
}
