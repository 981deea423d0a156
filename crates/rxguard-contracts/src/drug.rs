//! Reference-data records: interactions, contraindications, cross-sensitivities.
//!
//! These are the rows a `ReferenceStore` serves. Field names serialize in
//! camelCase so the same shapes can be handed to a rendering layer as-is.

use serde::{Deserialize, Serialize};

use crate::severity::{ContraindicationSeverity, CrossSensitivity, InteractionSeverity};

/// Fold a drug, allergen, or condition name into its comparison key.
///
/// Trims surrounding whitespace and lowercases. Display strings are kept
/// separately; this key is only ever used for equality.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A recorded drug-drug interaction.
///
/// The relation is symmetric: `{drug_a, drug_b}` is treated as an unordered
/// pair by every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugInteraction {
    pub drug_a: String,
    pub drug_b: String,
    pub severity: InteractionSeverity,
    pub description: String,
    pub clinical_effects: String,
    pub management_recommendation: String,
    /// Free text, e.g. "Well-documented", "Theoretical".
    pub evidence_level: String,
}

impl DrugInteraction {
    /// Return true if this record describes the unordered pair `{a, b}`.
    ///
    /// `a` and `b` must already be normalized keys.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        let x = normalize_key(&self.drug_a);
        let y = normalize_key(&self.drug_b);
        (x == a && y == b) || (x == b && y == a)
    }

    /// Return true if both sides name the same drug.
    pub fn is_self_pair(&self) -> bool {
        normalize_key(&self.drug_a) == normalize_key(&self.drug_b)
    }
}

/// A drug that is unsafe, absolutely or relatively, for a patient condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugContraindication {
    pub drug_name: String,
    /// Clinical condition or patient state, e.g. "Pregnancy".
    pub condition: String,
    pub severity: ContraindicationSeverity,
    pub description: String,
    pub alternative_recommendations: String,
}

/// A drug that may cross-react with a substance the patient is allergic to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyInteraction {
    pub allergen: String,
    pub drug_name: String,
    pub cross_sensitivity: CrossSensitivity,
    pub description: String,
    pub precautions: String,
}

/// A brand name or synonym mapped to the canonical name used by the
/// reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugAlias {
    pub alias: String,
    pub canonical: String,
}

/// A prescribed item resolved to its canonical drug identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalDrug {
    /// The name as it should be shown (the canonical name when an alias
    /// matched, otherwise the trimmed input).
    pub display: String,
    /// The comparison key passed to reference lookups.
    pub key: String,
}

impl CanonicalDrug {
    /// Build an identity from a display name, deriving its key.
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into().trim().to_string();
        let key = normalize_key(&display);
        Self { display, key }
    }
}
