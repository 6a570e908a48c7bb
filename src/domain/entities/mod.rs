//! Core domain entities.
//!
//! - [`AliasRecord`] - A mapping from a caller-chosen alias to a target URL

pub mod alias;

pub use alias::AliasRecord;
