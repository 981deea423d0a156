//! Check log entry and export types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rxguard_contracts::check::CheckRecord;

/// One link in the hash chain: a `CheckRecord` plus its position and hashes.
///
/// Changing any field, including inside `record`, invalidates `this_hash`
/// and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The log this entry belongs to (e.g. a dispensing station or ward).
    pub log_id: String,

    pub record: CheckRecord,

    /// `this_hash` of the previous entry, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// SHA-256 (hex) over (log_id, sequence, prev_hash, canonical JSON of record).
    pub this_hash: String,
}

impl LogEntry {
    /// The `prev_hash` of the first entry in every chain.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A snapshot of a check log, suitable for writing to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckLogExport {
    pub log_id: String,

    /// Entries in chain order.
    pub entries: Vec<LogEntry>,

    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last entry. Empty when the log is empty.
    pub terminal_hash: String,
}
