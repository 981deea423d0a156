//! Hash-chain primitives.
//!
//! Hash input layout (bytes, in order):
//!   1. log_id as UTF-8
//!   2. sequence as 8-byte little-endian
//!   3. prev_hash as UTF-8 (64 hex chars)
//!   4. compact JSON of the record

use sha2::{Digest, Sha256};

use rxguard_contracts::{
    check::CheckRecord,
    error::{RxError, RxResult},
};

use crate::entry::LogEntry;

/// Compute the SHA-256 hash for one log entry, as lowercase hex.
pub fn hash_entry(
    log_id: &str,
    sequence: u64,
    record: &CheckRecord,
    prev_hash: &str,
) -> RxResult<String> {
    let record_json = serde_json::to_vec(record).map_err(|e| RxError::AuditWriteFailed {
        reason: format!("check record could not be serialized: {e}"),
    })?;

    let mut hasher = Sha256::new();
    hasher.update(log_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    Ok(hex::encode(hasher.finalize()))
}

/// Verify linkage and hash correctness of every entry.
///
/// Sequence numbers must run 0, 1, 2, … without gaps. An empty chain is
/// valid.
pub fn verify_chain(entries: &[LogEntry]) -> bool {
    let mut expected_prev = LogEntry::GENESIS_HASH.to_string();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.sequence != idx as u64 || entry.prev_hash != expected_prev {
            return false;
        }

        match hash_entry(&entry.log_id, entry.sequence, &entry.record, &entry.prev_hash) {
            Ok(recomputed) if recomputed == entry.this_hash => {}
            _ => return false,
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
