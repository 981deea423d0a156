//! # rxguard-contracts
//!
//! Shared types, severity scales, and errors for the RXGUARD interaction
//! checker.
//!
//! All crates in the workspace import from here. No checking logic lives in
//! this crate, only data definitions, the flag derivation on results, and the
//! severity rank mapping.

pub mod check;
pub mod drug;
pub mod error;
pub mod severity;

#[cfg(test)]
mod tests {
    use super::*;
    use check::{CheckId, CheckRequest, InteractionCheckResult};
    use drug::{normalize_key, AllergyInteraction, CanonicalDrug, DrugContraindication, DrugInteraction};
    use error::RxError;
    use severity::{
        severity_rank, ContraindicationSeverity, CrossSensitivity, InteractionSeverity, Ranked,
        SeverityKind, SeverityRank,
    };

    fn interaction(a: &str, b: &str, severity: InteractionSeverity) -> DrugInteraction {
        DrugInteraction {
            drug_a: a.to_string(),
            drug_b: b.to_string(),
            severity,
            description: "test".to_string(),
            clinical_effects: "test".to_string(),
            management_recommendation: "test".to_string(),
            evidence_level: "Theoretical".to_string(),
        }
    }

    fn contraindication(severity: ContraindicationSeverity) -> DrugContraindication {
        DrugContraindication {
            drug_name: "Metformin".to_string(),
            condition: "Pregnancy".to_string(),
            severity,
            description: "test".to_string(),
            alternative_recommendations: "test".to_string(),
        }
    }

    fn allergy(cross_sensitivity: CrossSensitivity) -> AllergyInteraction {
        AllergyInteraction {
            allergen: "Penicillin".to_string(),
            drug_name: "Amoxicillin".to_string(),
            cross_sensitivity,
            description: "test".to_string(),
            precautions: "test".to_string(),
        }
    }

    // ── Names ────────────────────────────────────────────────────────────────

    #[test]
    fn normalize_key_trims_and_folds_case() {
        assert_eq!(normalize_key("  WarFarin \t"), "warfarin");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn canonical_drug_keeps_display_casing() {
        let drug = CanonicalDrug::new("  Aspirin ");
        assert_eq!(drug.display, "Aspirin");
        assert_eq!(drug.key, "aspirin");
    }

    #[test]
    fn interaction_pair_match_is_symmetric() {
        let rec = interaction("Warfarin", "Aspirin", InteractionSeverity::Critical);
        assert!(rec.involves_pair("warfarin", "aspirin"));
        assert!(rec.involves_pair("aspirin", "warfarin"));
        assert!(!rec.involves_pair("warfarin", "ibuprofen"));
        assert!(!rec.is_self_pair());
        assert!(interaction("Aspirin", " aspirin", InteractionSeverity::Minor).is_self_pair());
    }

    // ── Flag derivation ──────────────────────────────────────────────────────

    #[test]
    fn empty_result_has_no_flags() {
        let result = InteractionCheckResult::empty();
        assert!(result.is_clear());
        assert!(!result.has_critical_issues);
        assert!(!result.has_major_issues);
        assert_eq!(result.finding_count(), 0);
    }

    #[test]
    fn critical_interaction_sets_critical_flag() {
        let result = InteractionCheckResult::from_findings(
            vec![interaction("Warfarin", "Aspirin", InteractionSeverity::Critical)],
            vec![],
            vec![],
        );
        assert!(result.has_critical_issues);
        assert!(!result.has_major_issues);
    }

    #[test]
    fn absolute_contraindication_and_high_allergy_are_critical() {
        let result = InteractionCheckResult::from_findings(
            vec![],
            vec![contraindication(ContraindicationSeverity::Absolute)],
            vec![],
        );
        assert!(result.has_critical_issues);

        let result = InteractionCheckResult::from_findings(
            vec![],
            vec![],
            vec![allergy(CrossSensitivity::High)],
        );
        assert!(result.has_critical_issues);
        assert!(!result.has_major_issues);
    }

    #[test]
    fn major_and_relative_set_major_flag() {
        let result = InteractionCheckResult::from_findings(
            vec![interaction("A", "B", InteractionSeverity::Major)],
            vec![],
            vec![],
        );
        assert!(result.has_major_issues);
        assert!(!result.has_critical_issues);

        let result = InteractionCheckResult::from_findings(
            vec![],
            vec![contraindication(ContraindicationSeverity::Relative)],
            vec![],
        );
        assert!(result.has_major_issues);
    }

    #[test]
    fn moderate_and_minor_findings_raise_no_flags() {
        let result = InteractionCheckResult::from_findings(
            vec![
                interaction("A", "B", InteractionSeverity::Moderate),
                interaction("C", "D", InteractionSeverity::Minor),
            ],
            vec![],
            vec![allergy(CrossSensitivity::Moderate), allergy(CrossSensitivity::Low)],
        );
        assert!(!result.has_critical_issues);
        assert!(!result.has_major_issues);
        assert_eq!(result.finding_count(), 4);
    }

    #[test]
    fn critical_and_major_flags_are_independent() {
        let result = InteractionCheckResult::from_findings(
            vec![
                interaction("A", "B", InteractionSeverity::Critical),
                interaction("C", "D", InteractionSeverity::Major),
            ],
            vec![],
            vec![],
        );
        assert!(result.has_critical_issues);
        assert!(result.has_major_issues);
    }

    // ── Severity rank ────────────────────────────────────────────────────────

    #[test]
    fn severity_rank_maps_every_scale() {
        let interaction = SeverityKind::Interaction;
        let contra = SeverityKind::Contraindication;
        let cross = SeverityKind::CrossSensitivity;

        assert_eq!(severity_rank(interaction, "Critical"), Some(SeverityRank::High));
        assert_eq!(severity_rank(interaction, "major"), Some(SeverityRank::Medium));
        assert_eq!(severity_rank(interaction, "Moderate"), Some(SeverityRank::Medium));
        assert_eq!(severity_rank(interaction, "MINOR"), Some(SeverityRank::Low));
        assert_eq!(severity_rank(contra, "Absolute"), Some(SeverityRank::High));
        assert_eq!(severity_rank(contra, " Relative "), Some(SeverityRank::Medium));
        assert_eq!(severity_rank(cross, "High"), Some(SeverityRank::High));
        assert_eq!(severity_rank(cross, "Moderate"), Some(SeverityRank::Medium));
        assert_eq!(severity_rank(cross, "Low"), Some(SeverityRank::Low));
    }

    #[test]
    fn severity_rank_rejects_values_from_other_scales() {
        assert_eq!(severity_rank(SeverityKind::Contraindication, "Critical"), None);
        assert_eq!(severity_rank(SeverityKind::CrossSensitivity, "Minor"), None);
        assert_eq!(severity_rank(SeverityKind::Interaction, "High"), None);
    }

    #[test]
    fn severity_rank_orders_low_to_high() {
        assert!(SeverityRank::Low < SeverityRank::Medium);
        assert!(SeverityRank::Medium < SeverityRank::High);
        assert_eq!(ContraindicationSeverity::Absolute.rank(), SeverityRank::High);
        assert_eq!(CrossSensitivity::Low.rank(), SeverityRank::Low);
    }

    // ── Serde shapes ─────────────────────────────────────────────────────────

    #[test]
    fn result_serializes_with_camel_case_fields() {
        let result = InteractionCheckResult::from_findings(
            vec![interaction("Warfarin", "Aspirin", InteractionSeverity::Critical)],
            vec![],
            vec![],
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["hasCriticalIssues"], true);
        assert_eq!(json["hasMajorIssues"], false);
        assert_eq!(json["allergyAlerts"], serde_json::json!([]));
        assert_eq!(json["interactions"][0]["drugA"], "Warfarin");
        assert_eq!(json["interactions"][0]["severity"], "Critical");
        assert_eq!(json["interactions"][0]["managementRecommendation"], "test");
    }

    #[test]
    fn request_defaults_missing_lists_to_empty() {
        let req: CheckRequest =
            serde_json::from_value(serde_json::json!({ "drugNames": ["Aspirin"] })).unwrap();
        assert_eq!(req.drug_names, vec!["Aspirin".to_string()]);
        assert!(req.patient_allergies.is_empty());
        assert!(req.patient_conditions.is_empty());
    }

    #[test]
    fn check_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<String> =
            (0..50).map(|_| CheckId::new().0.to_string()).collect();
        assert_eq!(unique.len(), 50);
    }

    // ── RxError display messages ─────────────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = RxError::InvalidInput {
            reason: "drugNames[1] is blank".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("drugNames[1]"));
    }

    #[test]
    fn error_lookup_unavailable_display() {
        let err = RxError::LookupUnavailable {
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lookup unavailable"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn error_config_and_audit_display() {
        let msg = RxError::ConfigError { reason: "bad toml".to_string() }.to_string();
        assert!(msg.contains("configuration error"));
        let msg = RxError::AuditWriteFailed { reason: "lock poisoned".to_string() }.to_string();
        assert!(msg.contains("audit write failed"));
        let msg = RxError::OutputFailed { reason: "stdout closed".to_string() }.to_string();
        assert_eq!(msg, "output failed: stdout closed");
    }
}
