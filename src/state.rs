//! Shared state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::infrastructure::memory::InMemoryLinkStore;
use crate::infrastructure::persistence::SqliteUserRepository;

pub type AppLinkService = LinkService<InMemoryLinkStore>;
pub type AppUserService = UserService<SqliteUserRepository>;

/// State of the URL shortener. The link store lives inside the service and
/// is created once per process.
#[derive(Clone)]
pub struct ShortenerState {
    pub link_service: Arc<AppLinkService>,
}

impl ShortenerState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }
}

/// State of the user-management API.
#[derive(Clone)]
pub struct UsersState {
    pub user_service: Arc<AppUserService>,
}

impl UsersState {
    pub fn new(user_service: Arc<AppUserService>) -> Self {
        Self { user_service }
    }
}
