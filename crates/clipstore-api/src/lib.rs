//! Clipstore API Library
//!
//! This crate provides the HTTP handlers, application state, and setup for
//! the clipstore service.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
