//! Server Module
//!
//! Configuration, application state and app assembly for the Axum HTTP
//! server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment-driven configuration
//! ├── state.rs  - AppState shared across handlers
//! └── init.rs   - create_app: pool, schema, router
//! ```
//!
//! # Initialization Flow
//!
//! 1. Load configuration from the environment
//! 2. Connect the SQLite pool — unreachable storage aborts startup
//! 3. Ensure the `usuarios` and `contactos` schemas
//! 4. Build the session store and model gateway
//! 5. Assemble the router with CORS and tracing layers

/// Environment-driven configuration
pub mod config;

/// Application state shared across handlers
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ServerConfig, StartupError};
pub use init::create_app;
pub use state::AppState;
