//! Persistence contracts for the application state.
//!
//! # Responsibility
//! - Define the storage contract the store writes through.
//! - Isolate SQLite and JSON details from the action/reducer layer.

pub mod state_repo;
