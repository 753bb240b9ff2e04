/**
 * Contact Handler
 *
 * This module implements the contact-form handler for POST /contacto.
 *
 * # Validation
 *
 * - `name`, `email` and `message` must be non-empty after trimming
 * - `email` must match the standard address pattern
 * - `fuente` defaults to "general" when absent
 *
 * A rejected submission persists nothing. Any notification side effect
 * (email, alerting) is out of scope.
 */

use axum::{extract::State, response::Json};
use serde::Deserialize;

use crate::contact::db::{insert_contact, DEFAULT_FUENTE};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{check_email, required};

/// Contact-form request for POST /contacto
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    /// Optional source tag
    #[serde(default)]
    pub fuente: Option<String>,
}

/// Contact submission handler
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let nombre = required("name", &request.name)?;
    let email = required("email", &request.email)?;
    let mensaje = required("message", &request.message)?;

    check_email(&email)?;

    let fuente = request
        .fuente
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FUENTE);

    let message = insert_contact(&state.db, &nombre, &email, &mensaje, fuente).await?;

    tracing::info!("Contact message stored: id={} fuente={}", message.id, message.fuente);

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mensaje enviado correctamente",
    })))
}
