//! State store services.
//!
//! # Responsibility
//! - `actions`: pure reducer over `AppState`.
//! - `views`: derived read models.
//! - `store`: owned state with write-through persistence.
//! - `env`: clock and id inputs for the reducer.

pub mod actions;
pub mod env;
pub mod store;
pub mod views;
