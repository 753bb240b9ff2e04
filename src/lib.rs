//! EyePsicol Backend - Main Library
//!
//! HTTP backend for the EyePsicol psychology-services website, built with
//! Axum and SQLite.
//!
//! # Overview
//!
//! This library provides three independent verticals:
//!
//! - User registration and login with server-side session cookies
//! - A contact-form endpoint persisting inbound messages
//! - A chatbot proxy forwarding user messages to a locally hosted Ollama
//!   server, with canned answers, liveness probing and bounded
//!   restart-and-retry
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, password hashing, sessions, auth handlers
//! - **`contact`** - Contact-message persistence and handler
//! - **`chatbot`** - Ollama gateway, conversation context, chat handlers
//! - **`error`** - API error taxonomy and HTTP conversion
//! - **`validation`** - Input validation helpers
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T, ApiError>`; errors are caught
//! at the request boundary and converted to structured JSON. Only a failed
//! database connection at startup is fatal.

/// API error taxonomy and HTTP conversion
pub mod error;

/// Input validation helpers
pub mod validation;

/// Accounts, password hashing, sessions, auth handlers
pub mod auth;

/// Contact-message persistence and handler
pub mod contact;

/// Ollama gateway, conversation context, chat handlers
pub mod chatbot;

/// Configuration, application state, app assembly
pub mod server;

/// HTTP route configuration
pub mod routes;
