//! Prescribing gate: the caller-side policy applied to a check result.
//!
//! The engine only reports risk. Whether a critical finding blocks a
//! prescription or merely needs a pharmacist's acknowledgement is a workflow
//! decision, configured here.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rxguard_contracts::{
    check::InteractionCheckResult,
    error::{RxError, RxResult},
    severity::{ContraindicationSeverity, CrossSensitivity, InteractionSeverity},
};

/// What the prescribing workflow should do with a checked prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum PrescribingDecision {
    /// No finding reaches a gated level.
    Proceed,

    /// Submission may continue once a pharmacist acknowledges `reasons`.
    RequireAcknowledgement { reasons: Vec<String> },

    /// Submission is refused.
    Block { reasons: Vec<String> },
}

/// Gate configuration, loadable from TOML.
///
/// ```toml
/// block_on_critical = true
/// acknowledge_major = true
/// acknowledge_moderate_allergy = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Block when `has_critical_issues`; otherwise critical findings only
    /// require acknowledgement.
    pub block_on_critical: bool,
    /// Require acknowledgement when `has_major_issues`.
    pub acknowledge_major: bool,
    /// Also require acknowledgement for `Moderate` cross-sensitivities.
    pub acknowledge_moderate_allergy: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            block_on_critical: true,
            acknowledge_major: true,
            acknowledge_moderate_allergy: false,
        }
    }
}

impl GatePolicy {
    /// Parse a gate policy from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> RxResult<Self> {
        toml::from_str(s).map_err(|e| RxError::ConfigError {
            reason: format!("failed to parse gate policy TOML: {}", e),
        })
    }

    /// Decide what to do with `result`.
    pub fn evaluate(&self, result: &InteractionCheckResult) -> PrescribingDecision {
        let critical = critical_reasons(result);
        let mut acknowledge = Vec::new();

        if self.acknowledge_major && result.has_major_issues {
            acknowledge.extend(major_reasons(result));
        }
        if self.acknowledge_moderate_allergy {
            acknowledge.extend(
                result
                    .allergy_alerts
                    .iter()
                    .filter(|a| a.cross_sensitivity == CrossSensitivity::Moderate)
                    .map(|a| {
                        format!("moderate cross-sensitivity: {} with {} allergy", a.drug_name, a.allergen)
                    }),
            );
        }

        if result.has_critical_issues {
            if self.block_on_critical {
                warn!(reasons = critical.len(), "prescription blocked");
                return PrescribingDecision::Block { reasons: critical };
            }
            let mut reasons = critical;
            reasons.extend(acknowledge);
            return PrescribingDecision::RequireAcknowledgement { reasons };
        }

        if acknowledge.is_empty() {
            debug!("prescription may proceed");
            PrescribingDecision::Proceed
        } else {
            PrescribingDecision::RequireAcknowledgement { reasons: acknowledge }
        }
    }
}

fn critical_reasons(result: &InteractionCheckResult) -> Vec<String> {
    let interactions = result
        .interactions
        .iter()
        .filter(|i| i.severity == InteractionSeverity::Critical)
        .map(|i| format!("critical interaction: {} + {}", i.drug_a, i.drug_b));
    let contraindications = result
        .contraindications
        .iter()
        .filter(|c| c.severity == ContraindicationSeverity::Absolute)
        .map(|c| format!("absolute contraindication: {} in {}", c.drug_name, c.condition));
    let allergies = result
        .allergy_alerts
        .iter()
        .filter(|a| a.cross_sensitivity == CrossSensitivity::High)
        .map(|a| format!("high cross-sensitivity: {} with {} allergy", a.drug_name, a.allergen));

    interactions.chain(contraindications).chain(allergies).collect()
}

fn major_reasons(result: &InteractionCheckResult) -> Vec<String> {
    let interactions = result
        .interactions
        .iter()
        .filter(|i| i.severity == InteractionSeverity::Major)
        .map(|i| format!("major interaction: {} + {}", i.drug_a, i.drug_b));
    let contraindications = result
        .contraindications
        .iter()
        .filter(|c| c.severity == ContraindicationSeverity::Relative)
        .map(|c| format!("relative contraindication: {} in {}", c.drug_name, c.condition));

    interactions.chain(contraindications).collect()
}
