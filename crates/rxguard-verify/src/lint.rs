//! Consistency checks over a reference dataset.
//!
//! The engine tolerates odd data (a self-pair row is simply never reported),
//! but operators editing the TOML should hear about it. `lint_dataset` runs
//! every rule and collects all findings before returning.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rxguard_contracts::drug::normalize_key;
use rxguard_reference::ReferenceDataset;

/// How serious a lint finding is. Only errors fail the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    Warning,
    Error,
}

/// A single problem found in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    /// Stable identifier of the rule that fired, e.g. "self-interaction".
    pub rule_id: String,
    pub level: LintLevel,
    pub message: String,
}

/// The outcome of linting one dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// True when no `Error` finding was produced.
    pub passed: bool,
    pub findings: Vec<LintFinding>,
}

impl LintReport {
    pub fn errors(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter().filter(|f| f.level == LintLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter().filter(|f| f.level == LintLevel::Warning)
    }
}

#[derive(Default)]
struct Findings(Vec<LintFinding>);

impl Findings {
    fn push(&mut self, rule_id: &str, level: LintLevel, message: String) {
        warn!(rule_id, ?level, %message, "lint finding");
        self.0.push(LintFinding {
            rule_id: rule_id.to_string(),
            level,
            message,
        });
    }
}

/// Run every lint rule over `dataset`.
pub fn lint_dataset(dataset: &ReferenceDataset) -> LintReport {
    let mut out = Findings::default();

    // ── Interactions ─────────────────────────────────────────────────────────
    let mut pairs: HashMap<(String, String), usize> = HashMap::new();
    for (idx, row) in dataset.interactions.iter().enumerate() {
        let a = normalize_key(&row.drug_a);
        let b = normalize_key(&row.drug_b);

        if a.is_empty() || b.is_empty() {
            out.push(
                "blank-name",
                LintLevel::Error,
                format!("interactions[{idx}] has a blank drug name"),
            );
            continue;
        }
        if a == b {
            out.push(
                "self-interaction",
                LintLevel::Warning,
                format!(
                    "interactions[{idx}] pairs '{}' with itself and will never be reported",
                    row.drug_a
                ),
            );
            continue;
        }

        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(first) = pairs.get(&key) {
            out.push(
                "duplicate-pair",
                LintLevel::Warning,
                format!(
                    "interactions[{idx}] repeats the pair '{}' / '{}' from interactions[{first}]",
                    row.drug_a, row.drug_b
                ),
            );
        } else {
            pairs.insert(key, idx);
        }
    }

    // ── Contraindications ────────────────────────────────────────────────────
    let mut seen = HashSet::new();
    for (idx, row) in dataset.contraindications.iter().enumerate() {
        let drug = normalize_key(&row.drug_name);
        let condition = normalize_key(&row.condition);
        if drug.is_empty() || condition.is_empty() {
            out.push(
                "blank-name",
                LintLevel::Error,
                format!("contraindications[{idx}] has a blank drug or condition"),
            );
            continue;
        }
        if !seen.insert((drug, condition)) {
            out.push(
                "duplicate-contraindication",
                LintLevel::Warning,
                format!(
                    "contraindications[{idx}] repeats '{}' for '{}'",
                    row.drug_name, row.condition
                ),
            );
        }
    }

    // ── Allergy cross-sensitivities ──────────────────────────────────────────
    let mut seen = HashSet::new();
    for (idx, row) in dataset.allergy_interactions.iter().enumerate() {
        let allergen = normalize_key(&row.allergen);
        let drug = normalize_key(&row.drug_name);
        if allergen.is_empty() || drug.is_empty() {
            out.push(
                "blank-name",
                LintLevel::Error,
                format!("allergyInteractions[{idx}] has a blank allergen or drug"),
            );
            continue;
        }
        if !seen.insert((allergen, drug)) {
            out.push(
                "duplicate-allergy",
                LintLevel::Warning,
                format!(
                    "allergyInteractions[{idx}] repeats '{}' for allergen '{}'",
                    row.drug_name, row.allergen
                ),
            );
        }
    }

    // ── Aliases ──────────────────────────────────────────────────────────────
    let canonical_names: HashSet<String> = dataset
        .interactions
        .iter()
        .flat_map(|r| [normalize_key(&r.drug_a), normalize_key(&r.drug_b)])
        .chain(dataset.contraindications.iter().map(|r| normalize_key(&r.drug_name)))
        .chain(dataset.allergy_interactions.iter().map(|r| normalize_key(&r.drug_name)))
        .collect();
    let alias_keys: HashSet<String> =
        dataset.aliases.iter().map(|a| normalize_key(&a.alias)).collect();

    for (idx, row) in dataset.aliases.iter().enumerate() {
        let alias = normalize_key(&row.alias);
        let canonical = normalize_key(&row.canonical);

        if alias.is_empty() || canonical.is_empty() {
            out.push(
                "blank-name",
                LintLevel::Error,
                format!("aliases[{idx}] has a blank alias or canonical name"),
            );
            continue;
        }
        if alias == canonical {
            out.push(
                "alias-self",
                LintLevel::Warning,
                format!("aliases[{idx}] maps '{}' to itself", row.alias),
            );
            continue;
        }
        if canonical_names.contains(&alias) {
            out.push(
                "alias-shadows-canonical",
                LintLevel::Error,
                format!(
                    "aliases[{idx}] redirects '{}', which is a drug name in the reference tables",
                    row.alias
                ),
            );
        }
        if alias_keys.contains(&canonical) {
            out.push(
                "alias-chain",
                LintLevel::Error,
                format!(
                    "aliases[{idx}] points to '{}', which is itself an alias; aliases resolve one hop only",
                    row.canonical
                ),
            );
        }
    }

    let findings = out.0;
    let passed = !findings.iter().any(|f| f.level == LintLevel::Error);
    debug!(passed, findings = findings.len(), "dataset lint complete");

    LintReport { passed, findings }
}
