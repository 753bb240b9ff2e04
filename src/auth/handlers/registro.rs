/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /registro.
 *
 * # Registration Process
 *
 * 1. Validate required fields, username and password length, email format
 * 2. Normalize the email to lowercase
 * 3. Check username/email uniqueness
 * 4. Hash the password with bcrypt
 * 5. Create the account and establish a session
 * 6. Return the public account view with the session cookie
 *
 * # Validation
 *
 * - `nombre`, `usuario`, `email`, `contrasena` must be non-empty after
 *   trimming
 * - `usuario` must be at least 3 characters
 * - `contrasena` must be at least 6 characters
 * - `email` must match the standard address pattern
 *
 * # Errors
 *
 * - `400 Bad Request` - first violated validation constraint
 * - `409 Conflict` - username or email already registered
 * - `500 Internal Server Error` - database failure (generic message)
 */

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::auth::accounts::{create_account, identifier_taken};
use crate::auth::handlers::types::{AuthResponse, PublicUser, RegistroRequest};
use crate::auth::password::hash_password;
use crate::auth::sessions::session_cookie;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{check_email, required};

/// Registration handler
///
/// Validates the payload, creates the account and logs the new user in by
/// establishing a session. The response carries the session cookie and the
/// public account view; the password hash never leaves the server.
pub async fn registro(
    State(state): State<AppState>,
    Json(request): Json<RegistroRequest>,
) -> Result<Response, ApiError> {
    let mut nombre = required("nombre", &request.nombre)?;
    let usuario = required("usuario", &request.usuario)?;
    let email = required("email", &request.email)?.to_lowercase();
    let contrasena = required("contrasena", &request.contrasena)?;

    // Variant field: fold the surname into the display name when present
    if let Some(apellido) = request.apellido.as_deref() {
        let apellido = apellido.trim();
        if !apellido.is_empty() {
            nombre = format!("{nombre} {apellido}");
        }
    }

    if usuario.chars().count() < 3 {
        return Err(ApiError::validation(
            "El usuario debe tener al menos 3 caracteres",
        ));
    }

    if contrasena.chars().count() < 6 {
        return Err(ApiError::validation(
            "La contraseña debe tener al menos 6 caracteres",
        ));
    }

    check_email(&email)?;

    tracing::info!("Registro request for usuario: {}, email: {}", usuario, email);

    if identifier_taken(&state.db, &usuario, &email).await? {
        tracing::warn!("Registro conflict for usuario: {}", usuario);
        return Err(ApiError::conflict("El usuario o email ya están registrados"));
    }

    let password_hash = hash_password(&contrasena)?;

    let account = create_account(&state.db, &nombre, &usuario, &email, &password_hash).await?;

    let token = state
        .sessions
        .create(account.id, &account.nombre, &account.usuario, &account.email)
        .await;

    tracing::info!(
        "Account created: {} ({}) id={}",
        account.usuario,
        account.email,
        account.id
    );

    let body = AuthResponse {
        success: true,
        message: "Registro exitoso".to_string(),
        user: PublicUser::from(&account),
    };

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(body),
    )
        .into_response())
}
