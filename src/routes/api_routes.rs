/**
 * API Route Tables
 *
 * This module adds the application's endpoints to the router:
 *
 * ## Authentication
 * - `POST /registro` - user registration
 * - `POST /login` - user login
 * - `GET /check-auth` - session check
 * - `GET /logout` - session destruction
 * - `GET /login/google` - stub (not available)
 *
 * ## Contact
 * - `POST /contacto` - contact-form submission
 *
 * ## Chatbot
 * - `POST /api/chat` - chat through the model gateway
 * - `GET /api/health` - liveness report
 * - `POST /api/restart-ollama` - forced model restart
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::{check_auth, google_login, login, logout, registro};
use crate::chatbot::handlers::{chat, health, restart_ollama};
use crate::contact::submit_contact;
use crate::server::state::AppState;

/// Configure authentication and contact routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/registro", post(registro))
        .route("/login", post(login))
        .route("/check-auth", get(check_auth))
        .route("/logout", get(logout))
        .route("/login/google", get(google_login))
        // Contact endpoint
        .route("/contacto", post(submit_contact))
}

/// Configure chatbot routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .route("/api/restart-ollama", post(restart_ollama))
}
