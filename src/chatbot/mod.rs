//! Chatbot Module
//!
//! Model gateway forwarding user messages to a locally hosted Ollama
//! server, with canned-answer short-circuiting, liveness probing, bounded
//! restart-and-retry and per-user rolling conversation context.
//!
//! # Module Structure
//!
//! ```text
//! chatbot/
//! ├── mod.rs      - Module exports and documentation
//! ├── canned.rs   - Fixed answers for known trigger phrases
//! ├── context.rs  - Per-user conversation transcripts
//! ├── process.rs  - Optional supervision of the local Ollama process
//! ├── gateway.rs  - Liveness probe, retry policy and generation
//! └── handlers.rs - /api/chat, /api/health, /api/restart-ollama
//! ```
//!
//! # Failure Semantics
//!
//! Upstream timeouts and connection errors are recovered locally into
//! user-facing text; they never surface as server errors. A restart cycle
//! is attempted at most once per failed call.

/// Fixed answers for known trigger phrases
pub mod canned;

/// Per-user conversation transcripts
pub mod context;

/// Optional supervision of the local Ollama process
pub mod process;

/// Liveness probe, retry policy and generation
pub mod gateway;

/// HTTP handlers for the chatbot endpoints
pub mod handlers;

pub use context::ConversationStore;
pub use gateway::{ChatGateway, ChatbotConfig};
pub use process::OllamaSupervisor;
