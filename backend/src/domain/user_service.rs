use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::storage::UserStorage;
use shared::{CreateUserRequest, User};

/// Service for looking up and registering users
#[derive(Clone)]
pub struct UserService {
    storage: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = self.storage.get_user(user_id).await?;
        if user.is_none() {
            warn!("User not found: {}", user_id);
        }
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.storage.get_user_by_username(username).await
    }

    /// Register a new user; fails if the username is taken
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        info!("Creating user: username={}", request.username);

        let user = self.storage.create_user(request).await?;

        info!("Created user {} with ID: {}", user.username, user.id);
        Ok(user)
    }
}
