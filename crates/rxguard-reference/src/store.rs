//! In-memory `ReferenceStore` over a `ReferenceDataset`.
//!
//! Rows are indexed by normalized drug key at construction time. The store is
//! immutable afterwards; updating reference data means building a new store
//! and swapping it in behind the engine's `Arc`.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use rxguard_contracts::{
    drug::{normalize_key, AllergyInteraction, DrugContraindication, DrugInteraction},
    error::RxResult,
};
use rxguard_core::traits::ReferenceStore;

use crate::dataset::ReferenceDataset;

/// A `ReferenceStore` that answers lookups from indexed in-memory tables.
///
/// Construct via `from_dataset`, `from_toml_str`, `from_file`, or `bundled`.
#[derive(Debug, Default)]
pub struct InMemoryReferenceStore {
    /// Interactions keyed by the ordered (smaller, larger) key pair.
    interactions: HashMap<(String, String), Vec<DrugInteraction>>,
    contraindications: HashMap<String, Vec<DrugContraindication>>,
    allergy_interactions: HashMap<String, Vec<AllergyInteraction>>,
}

/// Order two keys so `{a, b}` and `{b, a}` share one index entry.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl InMemoryReferenceStore {
    /// Index every row of `dataset`. Aliases are ignored here; they belong to
    /// `AliasResolver`.
    pub fn from_dataset(dataset: &ReferenceDataset) -> Self {
        let mut store = Self::default();

        for row in &dataset.interactions {
            let key = pair_key(&normalize_key(&row.drug_a), &normalize_key(&row.drug_b));
            store.interactions.entry(key).or_default().push(row.clone());
        }
        for row in &dataset.contraindications {
            store
                .contraindications
                .entry(normalize_key(&row.drug_name))
                .or_default()
                .push(row.clone());
        }
        for row in &dataset.allergy_interactions {
            store
                .allergy_interactions
                .entry(normalize_key(&row.drug_name))
                .or_default()
                .push(row.clone());
        }

        info!(
            interactions = dataset.interactions.len(),
            contraindications = dataset.contraindications.len(),
            allergy_interactions = dataset.allergy_interactions.len(),
            "reference store loaded"
        );
        store
    }

    /// Parse a TOML dataset and index it.
    pub fn from_toml_str(s: &str) -> RxResult<Self> {
        Ok(Self::from_dataset(&ReferenceDataset::from_toml_str(s)?))
    }

    /// Read a TOML dataset from `path` and index it.
    pub fn from_file(path: &Path) -> RxResult<Self> {
        Ok(Self::from_dataset(&ReferenceDataset::from_file(path)?))
    }

    /// Index the dataset compiled into the crate.
    pub fn bundled() -> RxResult<Self> {
        Ok(Self::from_dataset(&ReferenceDataset::bundled()?))
    }
}

impl ReferenceStore for InMemoryReferenceStore {
    fn find_interactions(&self, drug_a: &str, drug_b: &str) -> RxResult<Vec<DrugInteraction>> {
        let found = self
            .interactions
            .get(&pair_key(drug_a, drug_b))
            .cloned()
            .unwrap_or_default();
        debug!(drug_a, drug_b, matches = found.len(), "interaction lookup");
        Ok(found)
    }

    fn find_contraindications(&self, drug: &str) -> RxResult<Vec<DrugContraindication>> {
        Ok(self.contraindications.get(drug).cloned().unwrap_or_default())
    }

    fn find_allergy_interactions(&self, drug: &str) -> RxResult<Vec<AllergyInteraction>> {
        Ok(self
            .allergy_interactions
            .get(drug)
            .cloned()
            .unwrap_or_default())
    }
}
