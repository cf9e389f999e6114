//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random salt per hash.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 8;
/// Longest accepted password
pub const MAX_PASSWORD_LEN: usize = 72;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Stands in for the stored hash when a login names no account
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("no-such-account-0").ok())
        .as_deref()
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check the strength policy, then hash
    ///
    /// # Errors
    /// Returns a validation error for weak passwords, or an internal error if hashing fails
    pub fn hash_checked(&self, password: &str) -> Result<String, AppError> {
        validate_password_strength(password)?;
        hash_password(password)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    /// Reject a login that has no stored hash to check, after spending one
    /// verification on a dummy hash
    pub fn reject_unknown(&self, password: &str) -> AppError {
        if let Some(hash) = dummy_hash() {
            let _ = verify_password(password, hash);
        }
        AppError::InvalidCredentials
    }
}

/// Validate password strength
///
/// A password must be 8 to 72 characters long and contain at least one
/// letter and at least one digit.
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();

    if len < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    if len > MAX_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        )));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::Validation(
            "Password must contain at least one letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}
