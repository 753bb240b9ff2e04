/**
 * Application State
 *
 * Central state container shared across all request handlers. Everything
 * that the original design held as process-wide globals (the session
 * mapping, the conversation contexts, the failure counter) is carried
 * here explicitly and injected through Axum's `State` extractor.
 *
 * # Thread Safety
 *
 * - `SqlitePool` hands out connections per query and returns them on
 *   every path
 * - `SessionStore` and the gateway's conversation store are `Arc`-shared
 *   behind tokio synchronization primitives
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::chatbot::ChatGateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Server-side session store
    pub sessions: SessionStore,
    /// Model gateway (contexts and failure counter inside)
    pub gateway: Arc<ChatGateway>,
}

impl AppState {
    /// Assemble the state container
    pub fn new(db: SqlitePool, sessions: SessionStore, gateway: ChatGateway) -> Self {
        Self {
            db,
            sessions,
            gateway: Arc::new(gateway),
        }
    }
}
