//! Shared test fixtures
//!
//! Spins the full application up against a throwaway SQLite file and a
//! cookie-keeping test client. The Ollama supervisor is always disabled
//! in tests so a simulated outage never touches real processes.

// Not every test crate uses every helper
#![allow(dead_code)]

use std::time::Duration;

use axum_test::{TestServer, TestServerConfig};
use tempfile::TempDir;

use eyepsicol::chatbot::{ChatbotConfig, OllamaSupervisor};
use eyepsicol::server::init::create_app_with_supervisor;
use eyepsicol::server::{AppState, ServerConfig};

/// A running application under test
pub struct TestApp {
    /// Cookie-keeping HTTP client over the router
    pub server: TestServer,
    /// State handle for direct pool access in assertions
    pub state: AppState,
    _db_dir: TempDir,
}

/// Spawn the app with an unreachable Ollama
///
/// Suitable for every test that never exercises generation (auth,
/// contact) and for outage scenarios.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_ollama("http://127.0.0.1:1").await
}

/// Spawn the app pointing the model gateway at the given base URL
pub async fn spawn_app_with_ollama(ollama_url: &str) -> TestApp {
    let db_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = db_dir.path().join("test.db");

    let config = ServerConfig {
        database_url: format!("sqlite:{}?mode=rwc", db_path.display()),
        chatbot: ChatbotConfig {
            ollama_url: ollama_url.to_string(),
            probe_timeout: Duration::from_millis(300),
            generate_timeout: Duration::from_millis(1000),
            ..ChatbotConfig::default()
        },
        ..ServerConfig::default()
    };

    let (app, state) = create_app_with_supervisor(&config, OllamaSupervisor::disabled())
        .await
        .expect("Failed to create app");

    let server = TestServer::new_with_config(
        app,
        TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        },
    )
    .expect("Failed to create test server");

    TestApp {
        server,
        state,
        _db_dir: db_dir,
    }
}

/// Register a user through the API
pub async fn register_user(app: &TestApp, usuario: &str, email: &str, contrasena: &str) {
    let response = app
        .server
        .post("/registro")
        .json(&serde_json::json!({
            "nombre": "Test",
            "usuario": usuario,
            "email": email,
            "contrasena": contrasena,
        }))
        .await;
    assert_eq!(response.status_code(), 200, "registration should succeed");
}
