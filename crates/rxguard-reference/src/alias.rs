//! Brand-name and synonym resolution.

use std::collections::HashMap;

use tracing::warn;

use rxguard_contracts::drug::{normalize_key, CanonicalDrug, DrugAlias};
use rxguard_core::traits::DrugResolver;

use crate::dataset::ReferenceDataset;

/// A `DrugResolver` backed by the dataset's alias table.
///
/// Resolution is a single hop: an alias maps to its canonical name, and the
/// canonical name is not itself looked up again. Names with no alias resolve
/// to themselves.
#[derive(Debug, Default, Clone)]
pub struct AliasResolver {
    aliases: HashMap<String, String>,
}

impl AliasResolver {
    /// Build a resolver from alias rows. When two rows share an alias, the
    /// first one wins.
    pub fn new(aliases: &[DrugAlias]) -> Self {
        let mut map = HashMap::with_capacity(aliases.len());
        for row in aliases {
            let key = normalize_key(&row.alias);
            if map.contains_key(&key) {
                warn!(alias = %row.alias, "duplicate alias ignored");
                continue;
            }
            map.insert(key, row.canonical.trim().to_string());
        }
        Self { aliases: map }
    }

    /// Build a resolver from the alias table of `dataset`.
    pub fn from_dataset(dataset: &ReferenceDataset) -> Self {
        Self::new(&dataset.aliases)
    }

    /// Number of distinct aliases known.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl DrugResolver for AliasResolver {
    fn resolve(&self, name: &str) -> CanonicalDrug {
        match self.aliases.get(&normalize_key(name)) {
            Some(canonical) => CanonicalDrug::new(canonical.as_str()),
            None => CanonicalDrug::new(name),
        }
    }
}
