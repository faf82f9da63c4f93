//! Account service - provisioning, credentials and admin access.
//!
//! Password hashing stays in the domain (`User::set_password`); this
//! service only persists the result.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Hash verified against when the user does not exist, so a failed login
/// costs the same whether or not the login name is taken.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("dummy-password")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a user account; a taken `user_id` fails with `Conflict`
    async fn provision(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by login name
    async fn get_user(&self, user_id: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Assign a new password value (hashed unless it equals the stored hash)
    async fn change_password(&self, user_id: &str, new_password: &str) -> AppResult<User>;

    /// Grant or revoke admin access
    async fn set_admin(&self, user_id: &str, is_admin: bool) -> AppResult<User>;

    /// Verify a login name and password pair
    async fn authenticate(&self, user_id: &str, password: &str) -> AppResult<User>;

    /// Authenticate and get the user if they may use the admin view
    async fn require_admin(&self, user_id: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AccountService using Unit of Work.
pub struct AccountManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccountManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AccountService for AccountManager<U> {
    async fn provision(&self, input: CreateUser) -> AppResult<User> {
        input
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let user = User::new(input.user_id, &input.password, input.print_name, input.is_admin)?;
        let user = self.uow.users().create(user).await?;

        tracing::info!(user_id = %user.user_id, is_admin = user.is_admin, "User provisioned");
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> AppResult<User> {
        self.uow
            .users()
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn change_password(&self, user_id: &str, new_password: &str) -> AppResult<User> {
        let mut user = self.get_user(user_id).await?;

        if !user.set_password(new_password)? {
            tracing::debug!(user_id, "Password unchanged, skipping write");
            return Ok(user);
        }

        let user = self
            .uow
            .users()
            .update_password(user.id, user.password_hash().to_string())
            .await?;
        tracing::info!(user_id, "Password changed");
        Ok(user)
    }

    async fn set_admin(&self, user_id: &str, is_admin: bool) -> AppResult<User> {
        let user = self.get_user(user_id).await?;
        let user = self.uow.users().set_admin(user.id, is_admin).await?;
        tracing::info!(user_id, is_admin, "Admin flag updated");
        Ok(user)
    }

    async fn authenticate(&self, user_id: &str, password: &str) -> AppResult<User> {
        let user = self.uow.users().find_by_user_id(user_id).await?;

        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash().to_string()),
            None => Password::from_hash(DUMMY_HASH.clone()),
        };
        let password_valid = stored.verify(password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => {
                tracing::warn!(user_id, "Authentication failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn require_admin(&self, user_id: &str, password: &str) -> AppResult<User> {
        let user = self.authenticate(user_id, password).await?;
        if !user.is_admin {
            tracing::warn!(user_id, "Admin access denied");
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }
}
