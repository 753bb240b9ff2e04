/**
 * Server Configuration
 *
 * This module loads server configuration from the environment, with
 * development defaults for everything except secrets (of which this
 * service keeps none in code).
 *
 * # Variables
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite:eyepsicol.db?mode=rwc`)
 * - `SERVER_PORT` - listen port (default 5002)
 * - `ALLOWED_ORIGIN` - CORS origin for the credentialed frontend
 *   (default `http://localhost:8000`)
 * - `SESSION_TTL_HOURS` - session lifetime (default 720 = 30 days)
 * - `OLLAMA_URL` - base URL of the generation server
 *   (default `http://localhost:11434`)
 * - `OLLAMA_MODEL` - model name (default `gemma2:2b`)
 *
 * Unparsable numeric values fall back to the default with a warning.
 */

use std::time::Duration;

use thiserror::Error;

use crate::chatbot::ChatbotConfig;

/// Fatal startup failures
///
/// Unlike request-time errors these abort the process with a clear
/// diagnostic rather than serving broken endpoints.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Database unreachable or schema creation failed
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    /// The configured CORS origin is not a valid header value
    #[error("invalid ALLOWED_ORIGIN: {0}")]
    CorsOrigin(#[from] axum::http::header::InvalidHeaderValue),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Listen port
    pub port: u16,
    /// CORS origin allowed to send credentials
    pub allowed_origin: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
    /// Model gateway configuration
    pub chatbot: ChatbotConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let chatbot = ChatbotConfig {
            ollama_url: env_or("OLLAMA_URL", "http://localhost:11434"),
            model: env_or("OLLAMA_MODEL", "gemma2:2b"),
            max_retries: env_parsed("OLLAMA_MAX_RETRIES", 3),
            probe_timeout: Duration::from_secs(env_parsed("OLLAMA_PROBE_TIMEOUT_SECS", 3)),
            generate_timeout: Duration::from_secs(env_parsed("OLLAMA_GENERATE_TIMEOUT_SECS", 30)),
            ..ChatbotConfig::default()
        };

        Self {
            database_url: env_or("DATABASE_URL", "sqlite:eyepsicol.db?mode=rwc"),
            port: env_parsed("SERVER_PORT", 5002),
            allowed_origin: env_or("ALLOWED_ORIGIN", "http://localhost:8000"),
            session_ttl_hours: env_parsed("SESSION_TTL_HOURS", 720),
            chatbot,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:eyepsicol.db?mode=rwc".to_string(),
            port: 5002,
            allowed_origin: "http://localhost:8000".to_string(),
            session_ttl_hours: 720,
            chatbot: ChatbotConfig::default(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Unparsable {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
