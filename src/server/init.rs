/**
 * Server Initialization
 *
 * This module assembles the application: database pool, schema, shared
 * state and router.
 *
 * # Initialization Steps
 *
 * 1. Connect the SQLite pool - an unreachable store is fatal and aborts
 *    startup with a diagnostic instead of serving broken endpoints
 * 2. Ensure the `usuarios` and `contactos` tables exist
 * 3. Build the session store and model gateway from configuration
 * 4. Assemble the router with CORS and tracing layers
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::chatbot::{ChatGateway, OllamaSupervisor};
use crate::routes::router::create_router;
use crate::server::config::{ServerConfig, StartupError};
use crate::server::state::AppState;

/// Create and configure the application
///
/// Returns the router together with the assembled state (tests use the
/// state handle to reach the pool directly).
pub async fn create_app(config: &ServerConfig) -> Result<(Router, AppState), StartupError> {
    create_app_with_supervisor(config, OllamaSupervisor::local()).await
}

/// `create_app` with an explicit supervisor
///
/// Tests pass a disabled supervisor so that a simulated Ollama outage
/// never touches real processes.
pub async fn create_app_with_supervisor(
    config: &ServerConfig,
    supervisor: OllamaSupervisor,
) -> Result<(Router, AppState), StartupError> {
    tracing::info!("Initializing EyePsicol backend");

    let db = connect_database(&config.database_url).await?;

    let sessions = SessionStore::new(config.session_ttl_hours);
    let gateway = ChatGateway::new(config.chatbot.clone(), supervisor);
    let state = AppState::new(db, sessions, gateway);

    let app = create_router(state.clone(), config)?;
    tracing::info!("Router configured");

    Ok((app, state))
}

/// Connect the pool and ensure the schema
///
/// Both steps are fatal on failure.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    crate::auth::accounts::ensure_schema(&pool).await?;
    crate::contact::db::ensure_schema(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}
