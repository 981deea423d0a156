//! The RXGUARD interaction engine.
//!
//! One check runs the pipeline:
//!
//!   Validate → Resolve → Pairwise interactions → Contraindications → Allergies → Flags
//!
//! The engine is stateless between calls. It holds shared read-only handles
//! to its collaborators, so a single instance can be cloned into request
//! handlers and called concurrently.
//!
//! A check either completes all three lookups or fails as a whole: a lookup
//! error is never folded into an empty category.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use rxguard_contracts::{
    check::{CheckId, CheckRecord, CheckRequest, InteractionCheckResult},
    drug::{normalize_key, CanonicalDrug},
    error::{RxError, RxResult},
};

use crate::traits::{CheckRecorder, DrugResolver, IdentityResolver, ReferenceStore};

/// Runs interaction checks against a reference store.
#[derive(Clone)]
pub struct InteractionEngine {
    store: Arc<dyn ReferenceStore>,
    resolver: Arc<dyn DrugResolver>,
}

impl InteractionEngine {
    /// Create an engine over `store`, resolving drug names with `resolver`.
    pub fn new(store: Arc<dyn ReferenceStore>, resolver: Arc<dyn DrugResolver>) -> Self {
        Self { store, resolver }
    }

    /// Create an engine that matches names exactly (after trim and case-fold).
    pub fn with_identity_resolver(store: Arc<dyn ReferenceStore>) -> Self {
        Self::new(store, Arc::new(IdentityResolver))
    }

    /// Check `request` for interactions, contraindications, and allergy
    /// cross-sensitivities.
    ///
    /// # Pipeline
    ///
    /// 1. Reject blank entries in any list with `RxError::InvalidInput`
    /// 2. Return the empty result if there are no drugs
    /// 3. Resolve drugs to canonical identities; collapse duplicates
    /// 4. Look up every unordered pair of distinct drugs once
    /// 5. Look up contraindications per drug, keep those matching a patient condition
    /// 6. Look up cross-sensitivities per drug, keep those matching a patient allergy
    /// 7. Derive `has_critical_issues` / `has_major_issues`
    ///
    /// # Errors
    ///
    /// `InvalidInput` for malformed requests, `LookupUnavailable` if any
    /// reference lookup fails. Finding nothing is `Ok`.
    pub fn check_interactions(&self, request: &CheckRequest) -> RxResult<InteractionCheckResult> {
        validate_entries("drugNames", &request.drug_names)?;
        validate_entries("patientAllergies", &request.patient_allergies)?;
        validate_entries("patientConditions", &request.patient_conditions)?;

        debug!(
            drugs = request.drug_names.len(),
            allergies = request.patient_allergies.len(),
            conditions = request.patient_conditions.len(),
            "interaction check starting"
        );

        if request.drug_names.is_empty() {
            debug!("no drugs supplied, returning empty result");
            return Ok(InteractionCheckResult::empty());
        }

        let drugs = self.resolve_drugs(&request.drug_names);
        let allergies = unique_keys(&request.patient_allergies);
        let conditions = unique_keys(&request.patient_conditions);

        // ── Pairwise interactions ────────────────────────────────────────────
        let mut interactions = Vec::new();
        for (i, a) in drugs.iter().enumerate() {
            for b in &drugs[i + 1..] {
                let found = self
                    .store
                    .find_interactions(&a.key, &b.key)
                    .map_err(|e| lookup_failed("interactions", &a.display, e))?;
                interactions.extend(found.into_iter().filter(|r| !r.is_self_pair()));
            }
        }

        // ── Contraindications ────────────────────────────────────────────────
        let mut contraindications = Vec::new();
        if !conditions.is_empty() {
            for drug in &drugs {
                let found = self
                    .store
                    .find_contraindications(&drug.key)
                    .map_err(|e| lookup_failed("contraindications", &drug.display, e))?;
                contraindications.extend(
                    found
                        .into_iter()
                        .filter(|c| conditions.contains(&normalize_key(&c.condition))),
                );
            }
        }

        // ── Allergy cross-sensitivity ────────────────────────────────────────
        let mut allergy_alerts = Vec::new();
        if !allergies.is_empty() {
            for drug in &drugs {
                let found = self
                    .store
                    .find_allergy_interactions(&drug.key)
                    .map_err(|e| lookup_failed("allergy interactions", &drug.display, e))?;
                allergy_alerts.extend(
                    found
                        .into_iter()
                        .filter(|a| allergies.contains(&normalize_key(&a.allergen))),
                );
            }
        }

        let result =
            InteractionCheckResult::from_findings(interactions, contraindications, allergy_alerts);

        info!(
            drugs = drugs.len(),
            interactions = result.interactions.len(),
            contraindications = result.contraindications.len(),
            allergy_alerts = result.allergy_alerts.len(),
            critical = result.has_critical_issues,
            major = result.has_major_issues,
            "interaction check complete"
        );

        Ok(result)
    }

    /// Run `check_interactions` and append the outcome to `recorder`.
    ///
    /// Nothing is recorded when the check itself fails. A recorder failure is
    /// returned as `RxError::AuditWriteFailed`; the result is not handed back
    /// in that case, since an unrecorded check must not be acted on.
    pub fn check_and_record(
        &self,
        request: &CheckRequest,
        recorder: &dyn CheckRecorder,
    ) -> RxResult<CheckRecord> {
        let result = self.check_interactions(request)?;

        let record = CheckRecord {
            check_id: CheckId::new(),
            request: request.clone(),
            result,
            timestamp: Utc::now(),
        };

        recorder.record(&record).map_err(|e| match e {
            RxError::AuditWriteFailed { .. } => e,
            other => RxError::AuditWriteFailed {
                reason: other.to_string(),
            },
        })?;

        debug!(check_id = %record.check_id.0, "check recorded");
        Ok(record)
    }

    /// Resolve every drug name, keeping the first occurrence of each canonical key.
    fn resolve_drugs(&self, names: &[String]) -> Vec<CanonicalDrug> {
        let mut seen = HashSet::new();
        let mut drugs = Vec::with_capacity(names.len());
        for name in names {
            let drug = self.resolver.resolve(name);
            if drug.key != normalize_key(name) {
                debug!(input = %name.trim(), canonical = %drug.display, "resolved drug alias");
            }
            if seen.insert(drug.key.clone()) {
                drugs.push(drug);
            }
        }
        drugs
    }
}

/// Reject blank entries, naming the list and index of the first offender.
fn validate_entries(field: &str, values: &[String]) -> RxResult<()> {
    match values.iter().position(|v| v.trim().is_empty()) {
        Some(idx) => Err(RxError::InvalidInput {
            reason: format!("{field}[{idx}] is blank"),
        }),
        None => Ok(()),
    }
}

fn unique_keys(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| normalize_key(v)).collect()
}

/// Fold any store error into `LookupUnavailable`, keeping its message.
fn lookup_failed(table: &str, drug: &str, err: RxError) -> RxError {
    warn!(table, drug, error = %err, "reference lookup failed, abandoning check");
    match err {
        RxError::LookupUnavailable { .. } => err,
        other => RxError::LookupUnavailable {
            reason: format!("{table} lookup for '{drug}' failed: {other}"),
        },
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
