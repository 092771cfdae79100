use std::sync::{Arc, Mutex, PoisonError};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::core::notice::Notice;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps every published event. Clones share the same buffer, so a caller
// can hand one clone to the library and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events().into_iter().filter_map(|e| e.notice).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
        Ok(())
    }
}
