//! Check requests, results, and the records written to the check log.
//!
//! `InteractionCheckResult` is what the engine returns to the caller.
//! `CheckRecord` is what a `CheckRecorder` stores, one per recorded check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    drug::{AllergyInteraction, DrugContraindication, DrugInteraction},
    severity::{ContraindicationSeverity, CrossSensitivity, InteractionSeverity},
};

/// The inputs to one interaction check.
///
/// `drug_names` is typically every active prescription plus the one being
/// added. Allergies and conditions default to empty when absent from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub drug_names: Vec<String>,
    #[serde(default)]
    pub patient_allergies: Vec<String>,
    #[serde(default)]
    pub patient_conditions: Vec<String>,
}

impl CheckRequest {
    /// Build a request from any string-like slices.
    pub fn new<S: AsRef<str>>(drugs: &[S], allergies: &[S], conditions: &[S]) -> Self {
        let own = |v: &[S]| v.iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            drug_names: own(drugs),
            patient_allergies: own(allergies),
            patient_conditions: own(conditions),
        }
    }
}

/// The structured risk report for one check. Constructed fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionCheckResult {
    pub interactions: Vec<DrugInteraction>,
    pub contraindications: Vec<DrugContraindication>,
    pub allergy_alerts: Vec<AllergyInteraction>,
    /// Any `Critical` interaction, `Absolute` contraindication, or `High`
    /// cross-sensitivity.
    pub has_critical_issues: bool,
    /// Any `Major` interaction or `Relative` contraindication.
    pub has_major_issues: bool,
}

impl InteractionCheckResult {
    /// A result with no findings and both flags false.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a result from collected findings, deriving both flags.
    pub fn from_findings(
        interactions: Vec<DrugInteraction>,
        contraindications: Vec<DrugContraindication>,
        allergy_alerts: Vec<AllergyInteraction>,
    ) -> Self {
        let has_critical_issues = interactions
            .iter()
            .any(|i| i.severity == InteractionSeverity::Critical)
            || contraindications
                .iter()
                .any(|c| c.severity == ContraindicationSeverity::Absolute)
            || allergy_alerts
                .iter()
                .any(|a| a.cross_sensitivity == CrossSensitivity::High);

        let has_major_issues = interactions
            .iter()
            .any(|i| i.severity == InteractionSeverity::Major)
            || contraindications
                .iter()
                .any(|c| c.severity == ContraindicationSeverity::Relative);

        Self {
            interactions,
            contraindications,
            allergy_alerts,
            has_critical_issues,
            has_major_issues,
        }
    }

    /// True when no category produced a finding.
    pub fn is_clear(&self) -> bool {
        self.interactions.is_empty()
            && self.contraindications.is_empty()
            && self.allergy_alerts.is_empty()
    }

    /// Total number of findings across all three categories.
    pub fn finding_count(&self) -> usize {
        self.interactions.len() + self.contraindications.len() + self.allergy_alerts.len()
    }
}

/// Unique identifier for one recorded check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    /// Create a new, unique check ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable record of one performed check, written to the check log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecord {
    pub check_id: CheckId,
    pub request: CheckRequest,
    pub result: InteractionCheckResult,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}
