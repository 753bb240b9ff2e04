//! Contact Module
//!
//! Persistence and handler for inbound contact-form submissions.
//!
//! # Module Structure
//!
//! ```text
//! contact/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - ContactMessage model and insert
//! └── handlers.rs - POST /contacto handler
//! ```
//!
//! Submissions are insert-only; no endpoint reads them back.

/// ContactMessage model and database operations
pub mod db;

/// HTTP handler for the contact endpoint
pub mod handlers;

pub use db::ContactMessage;
pub use handlers::submit_contact;
