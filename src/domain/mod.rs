//! Domain layer containing the alias entity and its storage contract.
//!
//! Nothing in this layer knows about HTTP or about a concrete database.
//!
//! # Architecture
//!
//! - [`entities`] - The alias record
//! - [`repositories`] - The [`repositories::AliasStore`] trait and its error type
//! - [`events`] - Observability sink handed to services at construction time
//!
//! Concrete stores live in [`crate::infrastructure::persistence`]; the service
//! translating store errors lives in [`crate::application::services`].

pub mod entities;
pub mod events;
pub mod repositories;
