//! Authentication Module
//!
//! This module handles user registration, login and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model and database operations
//! ├── password.rs     - Password hashing and verification
//! ├── sessions.rs     - Server-side session store and cookies
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── registro.rs - Registration handler
//!     ├── login.rs    - Login handler
//!     └── session.rs  - check-auth, logout and Google stub
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Registro**: fields validated → account created → session established
//! 2. **Login**: identifier matched against username or email → password
//!    verified → session established
//! 3. **Check-auth**: cookie token looked up in the session store
//! 4. **Logout**: session destroyed, cookie cleared (idempotent)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Session tokens are opaque UUIDs delivered in an HttpOnly cookie
//! - Failed logins return a single fixed message regardless of which
//!   field was wrong

/// Account model and database operations
pub mod accounts;

/// Password hashing and verification
pub mod password;

/// Server-side session store and cookie helpers
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::Account;
pub use handlers::types::{LoginRequest, PublicUser, RegistroRequest};
pub use handlers::{check_auth, google_login, login, logout, registro};
pub use sessions::{Session, SessionStore};
