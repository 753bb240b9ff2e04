//! Routes Module
//!
//! HTTP route configuration for the application.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly, index, layers, fallback
//! └── api_routes.rs - Auth, contact and chatbot route tables
//! ```

/// Router assembly and middleware layers
pub mod router;

/// Auth, contact and chatbot route tables
pub mod api_routes;

pub use router::create_router;
