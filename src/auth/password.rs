/**
 * Password Hashing
 *
 * One-way transform and comparator for credentials, backed by bcrypt.
 *
 * # Security
 *
 * - Hashes use bcrypt with DEFAULT_COST
 * - Verification is constant-time (via bcrypt)
 * - The stored hash is never the plaintext
 */

use crate::error::ApiError;

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::validation("No se pudo procesar la contraseña")
    })
}

/// Verify a password against a stored hash
///
/// A malformed stored hash verifies as false rather than erroring; it is
/// treated the same as a wrong password.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or_else(|e| {
        tracing::error!("Password verification error: {:?}", e);
        false
    })
}
