//! Reference dataset schema.
//!
//! A `ReferenceDataset` is deserialized from TOML and holds the three
//! reference tables plus the alias table. Row order is preserved and is the
//! order lookups return matches in.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rxguard_contracts::{
    drug::{AllergyInteraction, DrugAlias, DrugContraindication, DrugInteraction},
    error::{RxError, RxResult},
};

/// The dataset bundled with the crate.
pub const BUNDLED_DATASET: &str = include_str!("../data/reference.toml");

/// The top-level structure deserialized from a reference TOML file.
///
/// Every table is optional; a missing table is empty, not an error.
///
/// Example:
/// ```toml
/// [[interactions]]
/// drugA = "Warfarin"
/// drugB = "Aspirin"
/// severity = "Critical"
/// description = "..."
/// clinicalEffects = "..."
/// managementRecommendation = "..."
/// evidenceLevel = "Well-documented"
///
/// [[aliases]]
/// alias = "Coumadin"
/// canonical = "Warfarin"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataset {
    #[serde(default)]
    pub interactions: Vec<DrugInteraction>,
    #[serde(default)]
    pub contraindications: Vec<DrugContraindication>,
    #[serde(default)]
    pub allergy_interactions: Vec<AllergyInteraction>,
    #[serde(default)]
    pub aliases: Vec<DrugAlias>,
}

impl ReferenceDataset {
    /// Parse `s` as a TOML reference dataset.
    ///
    /// Returns `RxError::ConfigError` if the TOML is malformed or a row does
    /// not match the record schema (e.g. an unknown severity).
    pub fn from_toml_str(s: &str) -> RxResult<Self> {
        toml::from_str(s).map_err(|e| RxError::ConfigError {
            reason: format!("failed to parse reference TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a reference dataset.
    pub fn from_file(path: &Path) -> RxResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RxError::ConfigError {
            reason: format!("failed to read reference file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> RxResult<Self> {
        Self::from_toml_str(BUNDLED_DATASET)
    }

    /// Total number of rows across all tables.
    pub fn row_count(&self) -> usize {
        self.interactions.len()
            + self.contraindications.len()
            + self.allergy_interactions.len()
            + self.aliases.len()
    }
}
