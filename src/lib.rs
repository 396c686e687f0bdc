//! todo-rest
//!
//! A minimal to-do list manager delivered three ways:
//! - `todo`: local command-line tool persisting to a JSON file
//! - `todo-server`: REST server exposing the same list
//! - `todo-client`: command-line client for the REST API
//!
//! All three share the [`todo`] list model. Items are addressed by their
//! 1-based position, which shifts when an earlier item is deleted.

pub mod actions;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod local_cli;
pub mod middleware;
pub mod todo;
pub mod tracing_setup;
