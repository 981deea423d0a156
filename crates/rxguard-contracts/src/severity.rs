//! Severity vocabularies and the unified display rank.
//!
//! Each reference table grades risk on its own scale. Rendering layers only
//! need a three-tier rank, so every scale maps into `SeverityRank` through
//! one function instead of per-field switch logic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a drug-drug interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionSeverity {
    Critical,
    Major,
    Moderate,
    Minor,
}

/// Severity of a drug-condition contraindication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContraindicationSeverity {
    Absolute,
    Relative,
}

/// Likelihood that a drug cross-reacts with a known allergen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossSensitivity {
    High,
    Moderate,
    Low,
}

/// Which severity scale a raw value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityKind {
    Interaction,
    Contraindication,
    CrossSensitivity,
}

/// Unified three-tier display rank. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityRank {
    Low,
    Medium,
    High,
}

/// Anything graded on one of the three severity scales.
pub trait Ranked {
    /// The unified display rank of this value.
    fn rank(&self) -> SeverityRank;
}

impl Ranked for InteractionSeverity {
    fn rank(&self) -> SeverityRank {
        match self {
            InteractionSeverity::Critical => SeverityRank::High,
            InteractionSeverity::Major | InteractionSeverity::Moderate => SeverityRank::Medium,
            InteractionSeverity::Minor => SeverityRank::Low,
        }
    }
}

impl Ranked for ContraindicationSeverity {
    fn rank(&self) -> SeverityRank {
        match self {
            ContraindicationSeverity::Absolute => SeverityRank::High,
            ContraindicationSeverity::Relative => SeverityRank::Medium,
        }
    }
}

impl Ranked for CrossSensitivity {
    fn rank(&self) -> SeverityRank {
        match self {
            CrossSensitivity::High => SeverityRank::High,
            CrossSensitivity::Moderate => SeverityRank::Medium,
            CrossSensitivity::Low => SeverityRank::Low,
        }
    }
}

/// Map a raw severity string from any of the three scales to a display rank.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Returns
/// `None` when `value` is not a member of the scale named by `kind`.
pub fn severity_rank(kind: SeverityKind, value: &str) -> Option<SeverityRank> {
    let value = value.trim().to_lowercase();
    let rank = match (kind, value.as_str()) {
        (SeverityKind::Interaction, "critical") => InteractionSeverity::Critical.rank(),
        (SeverityKind::Interaction, "major") => InteractionSeverity::Major.rank(),
        (SeverityKind::Interaction, "moderate") => InteractionSeverity::Moderate.rank(),
        (SeverityKind::Interaction, "minor") => InteractionSeverity::Minor.rank(),
        (SeverityKind::Contraindication, "absolute") => ContraindicationSeverity::Absolute.rank(),
        (SeverityKind::Contraindication, "relative") => ContraindicationSeverity::Relative.rank(),
        (SeverityKind::CrossSensitivity, "high") => CrossSensitivity::High.rank(),
        (SeverityKind::CrossSensitivity, "moderate") => CrossSensitivity::Moderate.rank(),
        (SeverityKind::CrossSensitivity, "low") => CrossSensitivity::Low.rank(),
        _ => return None,
    };
    Some(rank)
}

impl fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InteractionSeverity::Critical => "Critical",
            InteractionSeverity::Major => "Major",
            InteractionSeverity::Moderate => "Moderate",
            InteractionSeverity::Minor => "Minor",
        };
        f.pad(s)
    }
}

impl fmt::Display for ContraindicationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContraindicationSeverity::Absolute => "Absolute",
            ContraindicationSeverity::Relative => "Relative",
        };
        f.pad(s)
    }
}

impl fmt::Display for CrossSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrossSensitivity::High => "High",
            CrossSensitivity::Moderate => "Moderate",
            CrossSensitivity::Low => "Low",
        };
        f.pad(s)
    }
}

impl fmt::Display for SeverityRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityRank::Low => "LOW",
            SeverityRank::Medium => "MEDIUM",
            SeverityRank::High => "HIGH",
        };
        f.pad(s)
    }
}
