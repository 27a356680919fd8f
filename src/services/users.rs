/// User service: validation, timestamp assignment, repository delegation.
///
/// Validation lives here so every transport (HTTP, gRPC) behaves
/// identically; the adapters only decode and map errors.
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::db::UserRepository;
use crate::error::{Result, UserError};
use crate::models::{NewUser, User, UserUpdate};
use crate::validators;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Validate the candidate record, stamp `created`, and insert it.
    /// The store assigns the id; the full stored record is returned.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        validators::validate_new_user(&new_user)?;

        let created = Utc::now();
        let user = self.repo.insert(new_user, created).await?;

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: i32) -> Result<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    /// Apply a partial update to an existing user. Only firstname, lastname,
    /// email, and age are mutable; `id` and `created` never change.
    pub async fn update_user(&self, id: i32, changes: UserUpdate) -> Result<User> {
        validators::validate_update(&changes)?;

        // An all-absent body changes nothing; skip the write and return the
        // current record (still NotFound for an unknown id)
        if changes.is_empty() {
            return self.get_user(id).await;
        }

        let user = self
            .repo
            .update(id, changes)
            .await?
            .ok_or(UserError::UserNotFound)?;

        info!(user_id = user.id, "user updated");
        Ok(user)
    }
}
