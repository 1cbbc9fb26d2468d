//! CanonicalIndex: the immutable canonical -> data-source-set mapping
//!
//! Total: lookups for unknown names return the empty set rather than an
//! error or `None`. Built once at startup and never mutated afterwards.

use std::collections::{HashMap, HashSet};

/// Read-only mapping from canonical-name strings to the set of data-source
/// identifiers that carry that name.
#[derive(Debug, Clone, Default)]
pub struct CanonicalIndex {
    entries: HashMap<String, HashSet<i64>>,
}

impl CanonicalIndex {
    /// Build an index from `(canonical, sources)` pairs, merging duplicate
    /// canonicals by unioning their source sets.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, HashSet<i64>)>,
    {
        let mut map: HashMap<String, HashSet<i64>> = HashMap::new();
        for (name, sources) in entries {
            map.entry(name).or_default().extend(sources);
        }
        Self { entries: map }
    }

    /// All canonical terms in the index, for fuzzy-backend construction.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total lookup: returns the empty set for unknown (or empty) names.
    pub fn lookup(&self, name: &str) -> HashSet<i64> {
        self.entries.get(name).cloned().unwrap_or_default()
    }

    /// Whether `name`'s source set intersects `filter`.
    ///
    /// An empty `filter` means "accept any source": the result collapses to
    /// whether `name` has any entry at all.
    pub fn intersects(&self, name: &str, filter: &HashSet<i64>) -> bool {
        match self.entries.get(name) {
            None => false,
            Some(sources) => {
                if filter.is_empty() {
                    !sources.is_empty()
                } else {
                    sources.iter().any(|s| filter.contains(s))
                }
            }
        }
    }
}
