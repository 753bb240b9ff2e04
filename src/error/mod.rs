//! API Error Module
//!
//! This module defines the error taxonomy for the backend and the
//! conversion of errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Malformed or missing input (user-correctable)
//! - `Conflict` - Uniqueness violation (username/email already taken)
//! - `Auth` - Bad credentials (deliberately vague message)
//! - `Storage` - Database failure (generic message to the client)
//! - `Upstream` - Generation service unreachable or failing
//!
//! All errors implement `IntoResponse` and are returned directly from
//! handlers as `{"success": false, "message": ...}` JSON bodies with the
//! appropriate status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
