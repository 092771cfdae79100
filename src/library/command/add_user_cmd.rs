use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::Role;
use crate::library::shared::SharedLibrary;
use crate::users::{Librarian, Reader, User, UserId};

pub struct AddUserCommand {
    library: SharedLibrary,
}

impl AddUserCommand {
    pub fn new(library: SharedLibrary) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddUserCommandRequest {
    role: Role,
    id: i64,
    name: String,
    email: String,
}

impl AddUserCommandRequest {
    pub fn new(role: Role, id: i64, name: &str, email: &str) -> Self {
        Self {
            role,
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddUserCommandResponse {
    pub user_id: UserId,
}

impl AddUserCommandResponse {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
        }
    }
}

impl Command<AddUserCommandRequest, AddUserCommandResponse> for AddUserCommand {
    fn execute(&self, req: AddUserCommandRequest) -> Result<AddUserCommandResponse, CommandError> {
        let user: Arc<dyn User> = match req.role {
            Role::Reader => Arc::new(Reader::new(req.id, req.name.as_str(), req.email.as_str())),
            Role::Librarian => Arc::new(Librarian::new(req.id, req.name.as_str(), req.email.as_str())),
        };
        self.library.add_user(user).map_err(CommandError::from).map(AddUserCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::command::add_user_cmd::{AddUserCommand, AddUserCommandRequest};
    use crate::library::factory::create_shared_library;

    #[test]
    fn test_should_run_add_user() {
        let library = create_shared_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let cmd = AddUserCommand::new(library.clone());
        let reader = cmd.execute(AddUserCommandRequest::new(Role::Reader, 1, "Иван Иванов", "ivan@example.com"))
            .expect("should add reader");
        let librarian = cmd.execute(AddUserCommandRequest::new(Role::Librarian, 2, "Анна Петрова", "anna@example.com"))
            .expect("should add librarian");
        let roles = library.with(|l| {
            (l.user(reader.user_id).map(|u| u.role()), l.user(librarian.user_id).map(|u| u.role()))
        });
        assert_eq!((Ok(Role::Reader), Ok(Role::Librarian)), roles);
    }
}
