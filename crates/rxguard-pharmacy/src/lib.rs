//! # rxguard-pharmacy
//!
//! Pharmacy-side reference caller for the RXGUARD interaction engine.
//!
//! - [`gate`] turns a check result into a prescribing decision
//!   (proceed / acknowledge / block) under a configurable policy.
//! - [`render`] flattens results into rank-ordered display lines.
//! - [`scenarios`] holds the five clinical reference scenarios.
//!
//! All scenario data is fictional.

pub mod gate;
pub mod render;
pub mod scenarios;

#[cfg(test)]
mod tests {
    use rxguard_audit::InMemoryCheckLog;
    use rxguard_contracts::{
        check::{CheckRequest, InteractionCheckResult},
        severity::SeverityRank,
    };
    use rxguard_core::InteractionEngine;
    use rxguard_reference::{engine_for, ReferenceDataset};

    use crate::gate::{GatePolicy, PrescribingDecision};
    use crate::render::{alert_lines, render_text, AlertCategory};
    use crate::scenarios::{all_scenarios, run_scenario};

    fn engine() -> InteractionEngine {
        engine_for(&ReferenceDataset::bundled().unwrap())
    }

    fn check(drugs: &[&str], allergies: &[&str], conditions: &[&str]) -> InteractionCheckResult {
        engine()
            .check_interactions(&CheckRequest::new(drugs, allergies, conditions))
            .unwrap()
    }

    // ── Scenarios ─────────────────────────────────────────────────────────────

    #[test]
    fn all_scenarios_pass_on_bundled_data() {
        let engine = engine();
        let log = InMemoryCheckLog::new("scenario-test");

        for scenario in all_scenarios() {
            let outcome = run_scenario(&engine, &log, &scenario).unwrap();
            assert!(
                outcome.passed(),
                "scenario {} failed: {:?}",
                scenario.name,
                outcome.mismatches
            );
        }

        assert_eq!(log.len().unwrap(), 5);
        assert!(log.verify_integrity());
    }

    #[test]
    fn scenario_mismatch_is_reported_not_raised() {
        // An empty dataset cannot satisfy the warfarin scenario.
        let engine = engine_for(&ReferenceDataset::default());
        let log = InMemoryCheckLog::new("scenario-mismatch");
        let scenario = &all_scenarios()[0];

        let outcome = run_scenario(&engine, &log, scenario).unwrap();
        assert!(!outcome.passed());
        assert!(outcome.mismatches.iter().any(|m| m.starts_with("interactions")));
        assert!(outcome.mismatches.iter().any(|m| m.starts_with("hasCriticalIssues")));
    }

    // ── Gate ──────────────────────────────────────────────────────────────────

    #[test]
    fn critical_result_is_blocked_by_default() {
        let decision = GatePolicy::default().evaluate(&check(&["Warfarin", "Aspirin"], &[], &[]));

        match decision {
            PrescribingDecision::Block { reasons } => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons[0].contains("Warfarin"));
            }
            other => panic!("expected Block, got {:?}", other),
        }
    }

    #[test]
    fn major_result_requires_acknowledgement() {
        let decision = GatePolicy::default().evaluate(&check(&["Ibuprofen"], &[], &["Asthma"]));

        match decision {
            PrescribingDecision::RequireAcknowledgement { reasons } => {
                assert!(reasons[0].contains("relative contraindication"));
            }
            other => panic!("expected RequireAcknowledgement, got {:?}", other),
        }
    }

    #[test]
    fn moderate_only_result_proceeds() {
        let result = check(&["Omeprazole", "Clopidogrel"], &[], &[]);
        assert_eq!(GatePolicy::default().evaluate(&result), PrescribingDecision::Proceed);
        assert_eq!(
            GatePolicy::default().evaluate(&InteractionCheckResult::empty()),
            PrescribingDecision::Proceed
        );
    }

    #[test]
    fn gate_policy_from_toml() {
        let policy = GatePolicy::from_toml_str(
            r#"
            block_on_critical = false
            acknowledge_moderate_allergy = true
            "#,
        )
        .unwrap();
        assert!(policy.acknowledge_major, "missing keys keep defaults");

        let decision = policy.evaluate(&check(&["Warfarin", "Aspirin"], &[], &[]));
        assert!(matches!(decision, PrescribingDecision::RequireAcknowledgement { .. }));

        let decision = policy.evaluate(&check(&["Cephalexin"], &["Penicillin"], &[]));
        match decision {
            PrescribingDecision::RequireAcknowledgement { reasons } => {
                assert!(reasons[0].contains("moderate cross-sensitivity"));
            }
            other => panic!("expected RequireAcknowledgement, got {:?}", other),
        }

        assert!(GatePolicy::from_toml_str("block_on_critical = \"yes\"").is_err());
    }

    #[test]
    fn decision_serializes_with_tag() {
        let json = serde_json::to_value(PrescribingDecision::Block {
            reasons: vec!["x".to_string()],
        })
        .unwrap();
        assert_eq!(json["decision"], "block");
        assert_eq!(json["reasons"][0], "x");
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn alert_lines_sort_highest_rank_first() {
        let result = check(
            &["Omeprazole", "Clopidogrel", "Amoxicillin"],
            &["Penicillin"],
            &[],
        );
        let lines = alert_lines(&result);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].rank, SeverityRank::High);
        assert_eq!(lines[0].category, AlertCategory::Allergy);
        assert_eq!(lines[1].rank, SeverityRank::Medium);
        assert_eq!(lines[1].severity, "Moderate");
    }

    #[test]
    fn render_clear_result() {
        let text = render_text(&InteractionCheckResult::empty());
        assert!(text.starts_with("No interactions"));
    }

    #[test]
    fn render_critical_result() {
        let text = render_text(&check(&["Warfarin", "Aspirin"], &[], &[]));
        assert!(text.contains("CRITICAL ISSUES PRESENT"));
        assert!(text.contains("[HIGH  ] interaction"));
        assert!(text.contains("Warfarin + Aspirin (Critical)"));
    }

    #[test]
    fn render_lays_out_headline_detail_and_advice() {
        let text = render_text(&check(&["Warfarin", "Aspirin"], &[], &[]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "!! CRITICAL ISSUES PRESENT");
        assert_eq!(
            lines[1],
            "[HIGH  ] interaction      Warfarin + Aspirin (Critical)"
        );
        assert!(lines[2].starts_with("         Concurrent anticoagulant"));
        assert!(lines[3].starts_with("         -> Avoid combination"));
        assert!(text.ends_with('\n'));
    }
}
