/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Match the identifier against both the username and email columns
 * 2. Verify the password with bcrypt
 * 3. Establish a session and set the session cookie
 *
 * # Security
 *
 * - An unknown identifier and a wrong password produce the identical
 *   401 response, so the response shape cannot be used to enumerate
 *   usernames
 * - Password verification is constant-time (via bcrypt)
 * - Passwords are never logged or returned
 */

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::auth::accounts::find_by_identifier;
use crate::auth::handlers::types::{AuthResponse, LoginRequest, PublicUser};
use crate::auth::password::verify_password;
use crate::auth::sessions::session_cookie;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::required;

/// Login handler
///
/// Accepts either the username or the email as identifier. On success
/// establishes a session and returns the public account view with the
/// session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let identifier = required("usuario", &request.usuario)?;
    let contrasena = required("contrasena", &request.contrasena)?;

    tracing::info!("Login request for: {}", identifier);

    let account = find_by_identifier(&state.db, &identifier).await?;

    // No-match and hash-mismatch collapse into the same error
    let account = match account {
        Some(account) if verify_password(&contrasena, &account.contrasena) => account,
        _ => {
            tracing::warn!("Failed login for: {}", identifier);
            return Err(ApiError::Auth);
        }
    };

    let token = state
        .sessions
        .create(account.id, &account.nombre, &account.usuario, &account.email)
        .await;

    tracing::info!("Login exitoso: {} ({})", account.usuario, account.email);

    let body = AuthResponse {
        success: true,
        message: "Login exitoso".to_string(),
        user: PublicUser::from(&account),
    };

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(body),
    )
        .into_response())
}
