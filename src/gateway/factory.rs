use crate::core::domain::Configuration;
use crate::gateway::console::publisher::ConsolePublisher;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::log::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Console => {
            Box::new(ConsolePublisher::new(config.locale))
        }
        GatewayPublisherVia::Log => {
            Box::new(LogPublisher::new(config.locale))
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEvent;
    use crate::core::messages::Locale;
    use crate::core::notice::Notice;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_create_working_publisher_via() {
        let config = Configuration::new("test").with_locale(Locale::English);
        let event = DomainEvent::announced("loan_returned", "loans", "key", &HashMap::new(),
                                           Notice::BookReturned { book: "b".to_string() }).expect("build event");
        for via in [GatewayPublisherVia::Console, GatewayPublisherVia::Log, GatewayPublisherVia::Memory] {
            let publisher = create_publisher(&config, via);
            assert!(publisher.publish(&event).is_ok(), "{:?} should publish", via);
        }
    }
}
