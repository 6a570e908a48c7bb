//! Alias entity representing a short alias to URL mapping.

/// A stored mapping from an alias to its target URL.
///
/// The alias is the natural key. Storage engines may keep their own row ids,
/// but those never leave the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub alias: String,
    pub target: String,
}

impl AliasRecord {
    /// Creates a new record.
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }
}
