//! Alias store implementations.
//!
//! # Stores
//!
//! - [`PgAliasStore`] - PostgreSQL storage with a unique constraint on the alias
//! - [`MemoryAliasStore`] - In-process map with the same conflict semantics

pub mod memory_alias_store;
pub mod pg_alias_store;

pub use memory_alias_store::MemoryAliasStore;
pub use pg_alias_store::PgAliasStore;
