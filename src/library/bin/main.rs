use std::sync::Arc;
use tracing::error;
use lms::books::Book;
use lms::core::domain::Configuration;
use lms::core::library::LibraryResult;
use lms::gateway::GatewayPublisherVia;
use lms::library::factory::create_library;
use lms::users::{Librarian, Reader};

fn main() {
    lms::utils::logging::setup_tracing();

    let config = Configuration::from_env();
    if let Err(err) = run(&config) {
        error!(error = %err, "front desk demo stopped");
        println!("{}", config.locale.render_error(&err));
    }
}

fn run(config: &Configuration) -> LibraryResult<()> {
    let mut library = create_library(config, GatewayPublisherVia::Console);

    let war_and_peace = library.add_book(Book::new("Война и мир", "978-5-17-118366-1", 1869))?;
    library.add_book(Book::new("Преступление и наказание", "978-5-699-75137-1", 1866))?;
    library.add_book(Book::new("Мастер и Маргарита", "978-5-17-080407-9", 1966))?;

    let reader = library.add_user(Arc::new(Reader::new(1, "Иван Иванов", "ivan@example.com")))?;
    let librarian = library.add_user(Arc::new(Librarian::new(2, "Анна Петрова", "anna@example.com")))?;

    library.login(librarian)?;
    library.announce_book(librarian, war_and_peace)?;

    library.login(reader)?;
    if let Err(err) = library.issue_loan(war_and_peace, reader) {
        println!("{}", config.locale.render_error(&err));
    }

    Ok(())
}
