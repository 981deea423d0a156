//! The five clinical scenarios and their runner.
//!
//!   1. Warfarin + Aspirin            → one Critical interaction
//!   2. Metformin, severe renal       → one Absolute contraindication
//!   3. Amoxicillin, penicillin allergy → one High cross-sensitivity
//!   4. Ibuprofen alone               → nothing
//!   5. Omeprazole + Clopidogrel      → one Moderate interaction, no flags

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rxguard_contracts::{
    check::{CheckRecord, CheckRequest},
    error::RxResult,
};
use rxguard_core::{traits::CheckRecorder, InteractionEngine};

/// The outcome a scenario must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    pub interactions: usize,
    pub contraindications: usize,
    pub allergy_alerts: usize,
    pub critical: bool,
    pub major: bool,
}

/// A named, fixed check with its expected outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub request: CheckRequest,
    pub expect: Expectation,
}

/// What happened when a scenario ran.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub record: CheckRecord,
    /// One message per expectation that did not hold. Empty on pass.
    pub mismatches: Vec<String>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

fn scenario(name: &str, request: CheckRequest, expect: Expectation) -> Scenario {
    Scenario {
        name: name.to_string(),
        request,
        expect,
    }
}

/// The five built-in scenarios, in order.
pub fn all_scenarios() -> Vec<Scenario> {
    let none = Expectation {
        interactions: 0,
        contraindications: 0,
        allergy_alerts: 0,
        critical: false,
        major: false,
    };

    vec![
        scenario(
            "warfarin-aspirin",
            CheckRequest::new(&["Warfarin", "Aspirin"], &[], &[]),
            Expectation { interactions: 1, critical: true, ..none },
        ),
        scenario(
            "metformin-renal-impairment",
            CheckRequest::new(&["Metformin"], &[], &["Severe Renal Impairment (eGFR <30)"]),
            Expectation { contraindications: 1, critical: true, ..none },
        ),
        scenario(
            "amoxicillin-penicillin-allergy",
            CheckRequest::new(&["Amoxicillin"], &["Penicillin"], &[]),
            Expectation { allergy_alerts: 1, critical: true, ..none },
        ),
        scenario(
            "ibuprofen-alone",
            CheckRequest::new(&["Ibuprofen"], &[], &[]),
            none,
        ),
        scenario(
            "omeprazole-clopidogrel",
            CheckRequest::new(&["Omeprazole", "Clopidogrel"], &[], &[]),
            Expectation { interactions: 1, ..none },
        ),
    ]
}

/// Run `scenario` through `engine`, recording it to `recorder`.
///
/// Expectation mismatches are reported in the outcome, not as errors; an
/// `Err` means the check itself could not run or be recorded.
pub fn run_scenario(
    engine: &InteractionEngine,
    recorder: &dyn CheckRecorder,
    scenario: &Scenario,
) -> RxResult<ScenarioOutcome> {
    let record = engine.check_and_record(&scenario.request, recorder)?;
    let result = &record.result;
    let expect = &scenario.expect;

    let mut mismatches = Vec::new();
    let mut compare = |what: &str, expected: String, actual: String| {
        if expected != actual {
            mismatches.push(format!("{what}: expected {expected}, got {actual}"));
        }
    };
    compare(
        "interactions",
        expect.interactions.to_string(),
        result.interactions.len().to_string(),
    );
    compare(
        "contraindications",
        expect.contraindications.to_string(),
        result.contraindications.len().to_string(),
    );
    compare(
        "allergy alerts",
        expect.allergy_alerts.to_string(),
        result.allergy_alerts.len().to_string(),
    );
    compare(
        "hasCriticalIssues",
        expect.critical.to_string(),
        result.has_critical_issues.to_string(),
    );
    compare(
        "hasMajorIssues",
        expect.major.to_string(),
        result.has_major_issues.to_string(),
    );

    if mismatches.is_empty() {
        info!(scenario = %scenario.name, "scenario passed");
    } else {
        warn!(scenario = %scenario.name, mismatches = mismatches.len(), "scenario failed");
    }

    Ok(ScenarioOutcome {
        scenario: scenario.clone(),
        record,
        mismatches,
    })
}
