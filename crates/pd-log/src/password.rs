//! Password hashing collaborator.
//!
//! Thin delegation to bcrypt: each hash carries its own random salt, so
//! equal passwords produce different hashes. The pipeline never logs
//! the plaintext or the resulting hash.

use crate::error::Result;

/// Hash a password for storage, using the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Hash a password with an explicit cost factor.
///
/// Low costs are for tests only; production callers should use
/// [`hash_password`].
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a candidate password against a stored hash.
pub fn is_valid(hashed_password: &str, password: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hashed_password)?)
}
