/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "success": false,
 *   "message": "El campo email es requerido"
 * }
 * ```
 *
 * The status code follows the taxonomy mapping in `types.rs`. Business
 * failures use proper 4xx codes rather than blanket 200s.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side errors keep their detail in the log only
        if status == StatusCode::INTERNAL_SERVER_ERROR || status == StatusCode::BAD_GATEWAY {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
