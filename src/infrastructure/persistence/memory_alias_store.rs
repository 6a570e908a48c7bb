//! In-process alias store.
//!
//! Will be lost on shutdown. Used by tests and local runs without Postgres.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{AliasStore, StoreError};

/// Alias store backed by a [`DashMap`].
///
/// Inserts go through the map's entry API, which holds the shard lock for the
/// key while deciding, so two concurrent saves of one alias behave like the
/// database unique constraint: one inserts, the other sees
/// [`StoreError::AliasExists`].
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    records: DashMap<String, AliasRecord>,
}

impl MemoryAliasStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored aliases.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copies out every stored record, in no particular order.
    pub fn records(&self) -> Vec<AliasRecord> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    async fn save(&self, target: &str, alias: &str) -> Result<(), StoreError> {
        if target.is_empty() {
            return Err(StoreError::EmptyTarget {
                alias: alias.to_owned(),
            });
        }

        match self.records.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StoreError::AliasExists {
                alias: alias.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(AliasRecord::new(alias, target));
                Ok(())
            }
        }
    }

    async fn get(&self, alias: &str) -> Result<String, StoreError> {
        self.records
            .get(alias)
            .map(|entry| entry.target.clone())
            .ok_or_else(|| StoreError::NotFound {
                alias: alias.to_owned(),
            })
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        self.records.remove(alias);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
