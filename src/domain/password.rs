//! Stored credentials.
//!
//! A [`Password`] only ever holds an Argon2 PHC string. Plaintext is hashed
//! on the way in and never kept.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// One-way hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    phc: String,
}

impl Password {
    /// Hash `plain_text` under a fresh random salt.
    ///
    /// # Errors
    /// [`AppError::Internal`] if Argon2 rejects the input.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();
        Ok(Self { phc })
    }

    /// Wrap a hash read back from storage. The value is not re-hashed.
    pub fn from_hash(phc: String) -> Self {
        Self { phc }
    }

    pub fn as_str(&self) -> &str {
        &self.phc
    }

    pub fn into_string(self) -> String {
        self.phc
    }

    /// Whether `value` is exactly the stored hash string.
    pub fn is_stored_value(&self, value: &str) -> bool {
        self.phc == value
    }

    /// Assign a new value.
    ///
    /// The stored hash itself is accepted unchanged; anything else is
    /// hashed. Returns whether the stored value changed.
    pub fn assign(&mut self, value: &str) -> AppResult<bool> {
        if self.is_stored_value(value) {
            return Ok(false);
        }
        *self = Self::new(value)?;
        Ok(true)
    }

    /// Check a candidate against the stored hash. A malformed hash never
    /// matches.
    pub fn verify(&self, candidate: &str) -> bool {
        match PasswordHash::new(&self.phc) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password is not a PHC string: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
