use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::core::messages::Locale;
use crate::core::notice::Notice;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each event as a structured tracing record
#[derive(Debug)]
pub struct LogPublisher {
    locale: Locale,
}

impl LogPublisher {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let message = event.notice.as_ref()
            .map(|notice| self.locale.render(notice))
            .unwrap_or_default();
        let actor = event.notice.as_ref().and_then(Notice::actor);
        let book = event.notice.as_ref().and_then(Notice::book);
        info!(event_id = %event.event_id, name = %event.name, group = %event.group, key = %event.key,
            kind = ?event.kind, actor, book, data = %event.json_data, "{}", message);
        Ok(())
    }
}
