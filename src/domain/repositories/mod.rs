//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_alias.rs` for usage examples.

pub mod alias_store;

pub use alias_store::{AliasStore, StoreError};

#[cfg(test)]
pub use alias_store::MockAliasStore;
