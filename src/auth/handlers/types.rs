/**
 * Authentication Handler Types
 *
 * Request and response schemas for the authentication endpoints. Payloads
 * are validated at the boundary into these typed structs rather than
 * checked ad hoc for key presence.
 */

use serde::{Deserialize, Serialize};

use crate::auth::accounts::Account;
use crate::auth::sessions::Session;

/// Registration request for POST /registro
#[derive(Debug, Deserialize, Serialize)]
pub struct RegistroRequest {
    /// Display name
    pub nombre: String,
    /// Optional surname, appended to the display name (variant field)
    #[serde(default)]
    pub apellido: Option<String>,
    /// Chosen username (at least 3 characters)
    pub usuario: String,
    /// Email address (normalized to lowercase)
    pub email: String,
    /// Password (at least 6 characters, hashed before storage)
    pub contrasena: String,
}

/// Login request for POST /login
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Username or email
    pub usuario: String,
    /// Password
    pub contrasena: String,
}

/// Public account view (without sensitive data)
///
/// Returned by registro, login and check-auth. Never carries the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    /// Account id
    pub id: i64,
    /// Display name
    pub nombre: String,
    /// Username
    pub usuario: String,
    /// Email address
    pub email: String,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            nombre: account.nombre.clone(),
            usuario: account.usuario.clone(),
            email: account.email.clone(),
        }
    }
}

impl From<&Session> for PublicUser {
    fn from(session: &Session) -> Self {
        Self {
            id: session.account_id,
            nombre: session.nombre.clone(),
            usuario: session.usuario.clone(),
            email: session.email.clone(),
        }
    }
}

/// Success response for registro and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always true on this path
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
    /// Public account view
    pub user: PublicUser,
}
