//! Transfer-credit flags

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Requirement identifiers the student has manually marked as externally
/// satisfied.
///
/// Entries are ordinary requirement ids, or synthetic per-category ids of the
/// shape `"<breadth-requirement-id>-<categoryKey>"` for breadth overrides.
/// An ordered set keeps serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferCredits(BTreeSet<String>);

impl TransferCredits {
    /// Create an empty transfer-credit set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build the synthetic id for a per-category breadth override
    #[must_use]
    pub fn breadth_entry(requirement_id: &str, category_key: &str) -> String {
        format!("{requirement_id}-{category_key}")
    }

    /// Mark a requirement id (or synthetic breadth id) as satisfied
    pub fn insert(&mut self, id: impl Into<String>) {
        self.0.insert(id.into());
    }

    /// Remove a flag; returns `true` if it was present
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Whether a requirement id is flagged
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Whether a breadth category of the given requirement is flagged
    #[must_use]
    pub fn contains_breadth(&self, requirement_id: &str, category_key: &str) -> bool {
        self.0
            .contains(&Self::breadth_entry(requirement_id, category_key))
    }

    /// Number of flags
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the flagged ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TransferCredits {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
