//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers (or any other
//! transport) a small API with a stable error vocabulary.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Create, resolve and delete aliases

pub mod services;
