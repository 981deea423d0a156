//! Collaborator trait definitions for the checking pipeline.
//!
//! - `ReferenceStore`: serves the three reference tables
//! - `DrugResolver`: maps a prescribed name to its canonical identity
//! - `CheckRecorder`: append-only sink for performed checks
//!
//! All three are `Send + Sync` so one engine can serve concurrent requests.

use rxguard_contracts::{
    check::CheckRecord,
    drug::{normalize_key, AllergyInteraction, CanonicalDrug, DrugContraindication, DrugInteraction},
    error::RxResult,
};

/// Read-only access to the interaction reference tables.
///
/// Implementations may be backed by a relational table, an in-memory map, or
/// a remote service. All names passed in are normalized keys (trimmed and
/// lowercased); implementations must compare against their own rows the same
/// way. A failure must be reported as `RxError::LookupUnavailable`, never as
/// an empty list.
pub trait ReferenceStore: Send + Sync {
    /// Return every interaction recorded for the unordered pair `{drug_a, drug_b}`.
    ///
    /// Must match rows in either orientation.
    fn find_interactions(&self, drug_a: &str, drug_b: &str) -> RxResult<Vec<DrugInteraction>>;

    /// Return every contraindication recorded for `drug`, for any condition.
    fn find_contraindications(&self, drug: &str) -> RxResult<Vec<DrugContraindication>>;

    /// Return every allergen cross-sensitivity recorded for `drug`.
    fn find_allergy_interactions(&self, drug: &str) -> RxResult<Vec<AllergyInteraction>>;
}

/// Resolves a prescribed item to a canonical drug identity before lookup.
pub trait DrugResolver: Send + Sync {
    /// Map `name` (already known to be non-blank) to its canonical identity.
    fn resolve(&self, name: &str) -> CanonicalDrug;
}

/// The exact-match resolver: trims and case-folds, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl DrugResolver for IdentityResolver {
    fn resolve(&self, name: &str) -> CanonicalDrug {
        CanonicalDrug {
            display: name.trim().to_string(),
            key: normalize_key(name),
        }
    }
}

/// Append-only sink for `CheckRecord`s.
///
/// A failed write must surface as `RxError::AuditWriteFailed`.
pub trait CheckRecorder: Send + Sync {
    /// Append one check record.
    fn record(&self, record: &CheckRecord) -> RxResult<()>;
}
