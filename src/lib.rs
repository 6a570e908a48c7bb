//! # Alias Shortener
//!
//! Maps caller-chosen aliases to URLs, backed by PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The alias record, the [`domain::repositories::AliasStore`]
//!   contract and the observability sink
//! - **Application Layer** ([`application`]) - [`application::services::AliasService`],
//!   which validates input and translates store errors
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Error Flow
//!
//! The store reports `AliasExists`, `EmptyTarget`, `NotFound` or a backend
//! failure. The service relabels the first three and rejects empty targets
//! itself; everything else passes through untouched. [`error::AppError`] turns
//! the result into HTTP statuses: 409, 400, 404 and 500 respectively.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_USER=postgres DB_PASSWORD=postgres DB_NAME=aliases
//! export AUTH_USER=admin AUTH_PASSWORD=secret
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasService, ErrorKind, ServiceError};
    pub use crate::domain::entities::AliasRecord;
    pub use crate::domain::events::{EventSink, TracingEventSink};
    pub use crate::domain::repositories::{AliasStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryAliasStore, PgAliasStore};
    pub use crate::state::AppState;
}
