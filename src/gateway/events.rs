use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// EventPublisher fans domain events out of the library. Publishing happens after the
// domain change has been applied, so a failing publisher never rolls a change back.
pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
