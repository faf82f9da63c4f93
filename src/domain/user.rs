//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Password;
use crate::errors::AppResult;

/// Registered participant.
///
/// The password is only ever held as a hash; assigning a new value goes
/// through [`User::set_password`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Storage-generated surrogate key (0 until persisted)
    pub id: i32,
    /// Unique login name
    pub user_id: String,
    /// Name shown on the leaderboard
    pub print_name: String,
    password: Password,
    /// Grants access to the admin view
    pub is_admin: bool,
    /// Number of accepted submissions
    pub n_submit: i32,
}

impl User {
    /// Create a not-yet-persisted user, hashing `password`.
    pub fn new(
        user_id: impl Into<String>,
        password: &str,
        print_name: impl Into<String>,
        is_admin: bool,
    ) -> AppResult<Self> {
        Ok(Self {
            id: 0,
            user_id: user_id.into(),
            print_name: print_name.into(),
            password: Password::new(password)?,
            is_admin,
            n_submit: 0,
        })
    }

    /// Rebuild a user from stored columns. `password_hash` is taken as-is.
    pub fn from_stored(
        id: i32,
        user_id: String,
        print_name: String,
        password_hash: String,
        is_admin: bool,
        n_submit: i32,
    ) -> Self {
        Self {
            id,
            user_id,
            print_name,
            password: Password::from_hash(password_hash),
            is_admin,
            n_submit,
        }
    }

    /// Assign a new password value.
    ///
    /// Writing back the value already stored is a no-op, so a reloaded hash
    /// is never hashed twice. Any other value replaces the stored hash.
    /// Returns whether the stored value changed.
    pub fn set_password(&mut self, value: &str) -> AppResult<bool> {
        self.password.assign(value)
    }

    /// Stored one-way hash.
    pub fn password_hash(&self) -> &str {
        self.password.as_str()
    }

    /// Check a candidate password against the stored hash.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }

    /// Stable identity handed to the login session layer.
    pub fn session_id(&self) -> &str {
        &self.user_id
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_id)
    }
}

/// Account provisioning input
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Login name
    #[validate(length(min = 1, max = 256, message = "user_id must be 1-256 characters"))]
    #[schema(example = "alice")]
    pub user_id: String,
    /// Plain text password, hashed before storage
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, max = 256, message = "print_name must be 1-256 characters"))]
    #[schema(example = "Alice")]
    pub print_name: String,
    /// Admin flag
    #[serde(default)]
    pub is_admin: bool,
}

/// User view safe to expose (no password hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "alice")]
    pub user_id: String,
    #[schema(example = "Alice")]
    pub print_name: String,
    pub is_admin: bool,
    pub n_submit: i32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            print_name: user.print_name.clone(),
            is_admin: user.is_admin,
            n_submit: user.n_submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("alice", "pw", "Alice", false).unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.n_submit, 0);
        assert!(!user.is_admin);
        assert!(!user.is_persisted());
        assert_ne!(user.password_hash(), "pw");
        assert!(user.check_password("pw"));
    }

    #[test]
    fn test_reassigning_stored_hash_does_not_rehash() {
        let mut user = User::new("alice", "first", "Alice", false).unwrap();
        let stored = user.password_hash().to_string();

        let changed = user.set_password(&stored).unwrap();

        assert!(!changed);
        assert_eq!(user.password_hash(), stored);
        assert!(user.check_password("first"));
    }

    #[test]
    fn test_assigning_new_value_rehashes() {
        let mut user = User::new("alice", "first", "Alice", false).unwrap();
        let before = user.password_hash().to_string();

        assert!(user.set_password("second").unwrap());

        assert_ne!(user.password_hash(), before);
        assert_ne!(user.password_hash(), "second");
        assert!(user.check_password("second"));
        assert!(!user.check_password("first"));
    }

    #[test]
    fn test_reloaded_user_keeps_hash() {
        let original = User::new("bob", "pw", "Bob", true).unwrap();
        let mut reloaded = User::from_stored(
            4,
            "bob".to_string(),
            "Bob".to_string(),
            original.password_hash().to_string(),
            true,
            2,
        );

        let hash = reloaded.password_hash().to_string();
        assert!(!reloaded.set_password(&hash).unwrap());
        assert!(reloaded.check_password("pw"));
        assert!(reloaded.is_persisted());
    }

    #[test]
    fn test_identity_is_user_id() {
        let user = User::new("carol", "pw", "Carol C.", false).unwrap();

        assert_eq!(user.session_id(), "carol");
        assert_eq!(user.to_string(), "carol");
    }

    #[test]
    fn test_create_user_validation() {
        let input = CreateUser {
            user_id: String::new(),
            password: "pw".to_string(),
            print_name: "Nobody".to_string(),
            is_admin: false,
        };
        assert!(input.validate().is_err());

        let input = CreateUser {
            user_id: "dave".to_string(),
            ..input
        };
        assert!(input.validate().is_ok());
    }
}
