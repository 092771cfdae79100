use std::fmt;
use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::core::messages::Locale;
use crate::gateway::events::EventPublisher;

// ConsolePublisher prints the notice of each event as one front-desk line. Events without
// a notice (plain catalog bookkeeping) are skipped.
pub struct ConsolePublisher {
    locale: Locale,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsolePublisher {
    pub fn new(locale: Locale) -> Self {
        Self::with_writer(locale, Box::new(std::io::stdout()))
    }

    pub fn with_writer(locale: Locale, out: Box<dyn Write + Send>) -> Self {
        Self {
            locale,
            out: Mutex::new(out),
        }
    }
}

impl Debug for ConsolePublisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsolePublisher")
            .field("locale", &self.locale)
            .finish()
    }
}

impl EventPublisher for ConsolePublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if let Some(notice) = &event.notice {
            let line = self.locale.render(notice);
            let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use crate::core::events::DomainEvent;
    use crate::core::library::Role;
    use crate::core::messages::Locale;
    use crate::core::notice::Notice;
    use crate::gateway::console::publisher::ConsolePublisher;
    use crate::gateway::events::EventPublisher;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf8 output")
        }
    }

    #[test]
    fn test_should_print_notice_lines() {
        let buffer = SharedBuffer::default();
        let publisher = ConsolePublisher::with_writer(Locale::Russian, Box::new(buffer.clone()));
        let event = DomainEvent::announced("user_login", "users", "1", &HashMap::new(),
                                           Notice::LoggedIn { role: Role::Reader, name: "Иван Иванов".to_string() })
            .expect("build event");
        publisher.publish(&event).expect("should publish");
        assert_eq!("Читатель Иван Иванов вошел в систему.\n", buffer.contents());
    }

    #[test]
    fn test_should_skip_events_without_notice() {
        let buffer = SharedBuffer::default();
        let publisher = ConsolePublisher::with_writer(Locale::English, Box::new(buffer.clone()));
        let event = DomainEvent::added("book_added", "books", "isbn", &HashMap::new(), None, &"data")
            .expect("build event");
        publisher.publish(&event).expect("should publish");
        assert_eq!("", buffer.contents());
    }
}
