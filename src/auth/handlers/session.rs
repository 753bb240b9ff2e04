/**
 * Session Handlers
 *
 * Handlers for GET /check-auth, GET /logout and the GET /login/google
 * stub.
 *
 * # Semantics
 *
 * - check-auth has no error path: an absent or expired session is the
 *   normal anonymous state, reported as `{"authenticated": false}`
 * - logout is idempotent: destroying a non-existent session still
 *   succeeds and clears the cookie
 */

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Json, Response},
};

use crate::auth::handlers::types::PublicUser;
use crate::auth::sessions::{clear_cookie, token_from_headers};
use crate::server::state::AppState;

/// Session check handler
///
/// Looks up the request's cookie token in the session store and reports
/// whether the caller is authenticated. Always 200.
pub async fn check_auth(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = match token_from_headers(&headers) {
        Some(token) => state.sessions.get(&token).await,
        None => None,
    };

    match session {
        Some(session) => Json(serde_json::json!({
            "authenticated": true,
            "user": PublicUser::from(&session),
        }))
        .into_response(),
        None => Json(serde_json::json!({ "authenticated": false })).into_response(),
    }
}

/// Logout handler
///
/// Destroys the current session if one exists and clears the cookie.
/// Always succeeds.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = token_from_headers(&headers) {
        state.sessions.remove(&token).await;
        tracing::info!("Session destroyed");
    }

    (
        AppendHeaders([(header::SET_COOKIE, clear_cookie())]),
        Json(serde_json::json!({
            "success": true,
            "message": "Sesión cerrada correctamente",
        })),
    )
        .into_response()
}

/// Google login stub
///
/// OAuth integration is out of scope; the endpoint exists so the frontend
/// gets a well-formed refusal instead of a 404.
pub async fn google_login() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": false,
        "message": "Login con Google no está disponible",
    }))
}
