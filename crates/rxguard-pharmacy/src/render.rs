//! Text rendering of check results, grouped by unified severity rank.

use serde::{Deserialize, Serialize};

use rxguard_contracts::{
    check::InteractionCheckResult,
    severity::{Ranked, SeverityRank},
};

/// Which reference table a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertCategory {
    Interaction,
    Contraindication,
    Allergy,
}

/// One finding flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLine {
    pub rank: SeverityRank,
    pub category: AlertCategory,
    /// Severity on the finding's own scale, e.g. "Absolute".
    pub severity: String,
    pub headline: String,
    pub detail: String,
    pub advice: String,
}

/// Flatten `result` into display lines, highest rank first.
///
/// Within one rank, lines keep category order (interactions, then
/// contraindications, then allergies) and the engine's order.
pub fn alert_lines(result: &InteractionCheckResult) -> Vec<AlertLine> {
    let mut lines: Vec<AlertLine> = Vec::with_capacity(result.finding_count());

    lines.extend(result.interactions.iter().map(|i| AlertLine {
        rank: i.severity.rank(),
        category: AlertCategory::Interaction,
        severity: i.severity.to_string(),
        headline: format!("{} + {}", i.drug_a, i.drug_b),
        detail: format!("{} {}", i.description, i.clinical_effects),
        advice: i.management_recommendation.clone(),
    }));
    lines.extend(result.contraindications.iter().map(|c| AlertLine {
        rank: c.severity.rank(),
        category: AlertCategory::Contraindication,
        severity: c.severity.to_string(),
        headline: format!("{} in {}", c.drug_name, c.condition),
        detail: c.description.clone(),
        advice: c.alternative_recommendations.clone(),
    }));
    lines.extend(result.allergy_alerts.iter().map(|a| AlertLine {
        rank: a.cross_sensitivity.rank(),
        category: AlertCategory::Allergy,
        severity: a.cross_sensitivity.to_string(),
        headline: format!("{} with {} allergy", a.drug_name, a.allergen),
        detail: a.description.clone(),
        advice: a.precautions.clone(),
    }));

    // Stable sort keeps category and engine order inside a rank.
    lines.sort_by(|a, b| b.rank.cmp(&a.rank));
    lines
}

/// Render `result` as plain text for terminals and logs.
pub fn render_text(result: &InteractionCheckResult) -> String {
    if result.is_clear() {
        return "No interactions, contraindications, or allergy alerts found.\n".to_string();
    }

    let mut out = String::new();
    if result.has_critical_issues {
        out.push_str("!! CRITICAL ISSUES PRESENT\n");
    }
    if result.has_major_issues {
        out.push_str("!  Major issues present\n");
    }

    for line in alert_lines(result) {
        let label = match line.category {
            AlertCategory::Interaction => "interaction",
            AlertCategory::Contraindication => "contraindication",
            AlertCategory::Allergy => "allergy",
        };
        out.push_str(&format!(
            "[{:<6}] {:<16} {} ({})\n",
            line.rank, label, line.headline, line.severity
        ));
        out.push_str(&format!("         {}\n", line.detail));
        out.push_str(&format!("         -> {}\n", line.advice));
    }
    out
}
