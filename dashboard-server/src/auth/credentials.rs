//! Credential verification
//!
//! Seam between the login handler and wherever accounts actually live.
//! The dashboard runs single-tenant with one operator account, so the
//! bundled [`StaticCredentials`] holds exactly one username and an
//! argon2 hash computed at startup. A directory-backed verifier can
//! replace it behind the same trait.

use async_trait::async_trait;
use thiserror::Error;

/// Verification error
///
/// Wrong username and wrong password collapse into the same value so
/// callers cannot tell which one failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Credential store error: {0}")]
    Store(String),
}

/// Identity attached to a successful login
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub id: String,
    pub username: String,
    pub role: String,
    pub permissions: Vec<String>,
}

/// Pluggable credential check used by `POST /api/auth/login`
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, CredentialError>;
}

/// Single-account verifier
///
/// The plaintext password from configuration is hashed once at
/// construction and dropped; only the argon2 hash is kept in memory.
pub struct StaticCredentials {
    username: String,
    password_hash: String,
}

impl StaticCredentials {
    /// Hash the configured password and build the verifier
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self, CredentialError> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)
                .map_err(|e| CredentialError::Store(e.to_string()))?,
        })
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, CredentialError> {
        // Verify even on a username mismatch so both failure paths cost
        // the same
        let password_valid = verify_password(password, &self.password_hash)
            .map_err(|e| CredentialError::Store(e.to_string()))?;

        if username != self.username || !password_valid {
            return Err(CredentialError::InvalidCredentials);
        }

        Ok(VerifiedUser {
            id: self.username.clone(),
            username: self.username.clone(),
            role: "admin".to_string(),
            permissions: vec!["*".to_string()],
        })
    }
}

/// Hash password using argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a password against an argon2 hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
