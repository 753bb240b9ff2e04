//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`registro`** - POST /registro - User registration
//! - **`login`** - POST /login - User authentication
//! - **`check_auth`** - GET /check-auth - Session check
//! - **`logout`** - GET /logout - Session destruction
//! - **`google_login`** - GET /login/google - Stub (not available)

/// Request and response types
pub mod types;

/// Registration handler
pub mod registro;

/// Login handler
pub mod login;

/// Session check, logout and Google stub handlers
pub mod session;

// Re-export handlers
pub use login::login;
pub use registro::registro;
pub use session::{check_auth, google_login, logout};
