use crate::application::services::UserService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}
