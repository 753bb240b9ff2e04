/**
 * Router Configuration
 *
 * This module assembles the full Axum router: index endpoint, API route
 * tables, CORS and tracing layers, and the 404 fallback.
 *
 * # CORS
 *
 * The frontend sends the session cookie cross-origin, so the CORS layer
 * allows credentials for the single configured origin. A credentialed
 * layer cannot use wildcards; the origin must parse as a header value or
 * startup fails.
 */

use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{configure_api_routes, configure_chat_routes};
use crate::server::config::{ServerConfig, StartupError};
use crate::server::state::AppState;

/// Create the router with all routes and layers configured
pub fn create_router(state: AppState, config: &ServerConfig) -> Result<Router, StartupError> {
    let origin: HeaderValue = config.allowed_origin.parse()?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new().route("/", get(index));
    let router = configure_api_routes(router);
    let router = configure_chat_routes(router);

    let router = router
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Index handler listing the available endpoints
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "API EyePsicol funcionando",
        "endpoints": {
            "login": "/login (POST)",
            "registro": "/registro (POST)",
            "check-auth": "/check-auth (GET)",
            "logout": "/logout (GET)",
            "contacto": "/contacto (POST)",
            "chat": "/api/chat (POST)",
            "health": "/api/health (GET)"
        }
    }))
}
