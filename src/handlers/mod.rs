//! HTTP API Handlers
//!
//! The REST surface of the todo server: routing, shared state, request and
//! response types, and the handlers themselves.

// Core modules
pub mod router;
pub mod state;
pub mod types;

// Root and fallback
pub mod health;

// Todo CRUD
pub mod todos;

// Test utilities (compiled only in test builds)
#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used items
pub use router::{build_router, build_routes, AppState};
pub use state::TodoStore;
pub use types::*;
