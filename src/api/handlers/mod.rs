//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod aliases;
pub mod health;

pub use aliases::{delete_alias_handler, get_alias_handler, save_alias_handler};
pub use health::health_handler;
