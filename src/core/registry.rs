use std::collections::BTreeMap;

use crate::core::types::{Identifier, RegistryEntry};

/// Deduplicating identifier -> name map built from one pass over the input.
///
/// Later insertions for the same identifier replace earlier ones, since the
/// IEEE data re-assigns blocks over time.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: BTreeMap<Identifier, String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name for an identifier
    pub fn put(&mut self, identifier: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(Identifier::new(identifier), name.into());
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries
            .get(&Identifier::new(identifier))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted ascending by identifier (byte order)
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self
                .entries
                .iter()
                .map(|(identifier, name)| RegistryEntry {
                    identifier: identifier.clone(),
                    name: name.clone(),
                })
                .collect(),
        }
    }

    /// Freeze the registry into its sorted snapshot
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            entries: self
                .entries
                .into_iter()
                .map(|(identifier, name)| RegistryEntry { identifier, name })
                .collect(),
        }
    }
}

/// Immutable, identifier-ordered view of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<RegistryEntry>,
}

impl Snapshot {
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }
}
