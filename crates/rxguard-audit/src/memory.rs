//! In-memory implementation of `CheckRecorder`.
//!
//! Entries live in a `Vec` behind a `Mutex`, so one log can be shared by
//! every request handler that records checks.

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, warn};

use rxguard_contracts::{
    check::CheckRecord,
    error::{RxError, RxResult},
};
use rxguard_core::traits::CheckRecorder;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{CheckLogExport, LogEntry},
};

pub(crate) struct LogState {
    pub(crate) entries: Vec<LogEntry>,
    pub(crate) last_hash: String,
}

/// An append-only check log backed by a SHA-256 hash chain.
pub struct InMemoryCheckLog {
    log_id: String,
    pub(crate) state: Mutex<LogState>,
}

impl InMemoryCheckLog {
    /// Create an empty log. The first entry will link to `GENESIS_HASH`.
    pub fn new(log_id: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            state: Mutex::new(LogState {
                entries: Vec::new(),
                last_hash: LogEntry::GENESIS_HASH.to_string(),
            }),
        }
    }

    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    /// Number of entries recorded so far.
    ///
    /// Returns `RxError::AuditWriteFailed` if the log's lock is poisoned.
    pub fn len(&self) -> RxResult<usize> {
        Ok(self.lock()?.entries.len())
    }

    pub fn is_empty(&self) -> RxResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Snapshot every entry written so far.
    pub fn export_log(&self) -> RxResult<CheckLogExport> {
        let state = self.lock()?;
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        Ok(CheckLogExport {
            log_id: self.log_id.clone(),
            entries: state.entries.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        })
    }

    /// Return true if the in-memory chain is intact.
    pub fn verify_integrity(&self) -> bool {
        match self.state.lock() {
            Ok(state) => verify_chain(&state.entries),
            Err(_) => false,
        }
    }

    fn lock(&self) -> RxResult<std::sync::MutexGuard<'_, LogState>> {
        self.state.lock().map_err(|e| RxError::AuditWriteFailed {
            reason: format!("check log lock poisoned: {}", e),
        })
    }
}

impl CheckRecorder for InMemoryCheckLog {
    fn record(&self, record: &CheckRecord) -> RxResult<()> {
        let mut state = self.lock()?;

        let sequence = state.entries.len() as u64;
        let prev_hash = state.last_hash.clone();
        let this_hash = hash_entry(&self.log_id, sequence, record, &prev_hash)?;

        if record.result.has_critical_issues {
            warn!(
                log_id = %self.log_id,
                check_id = %record.check_id.0,
                "recording check with critical issues"
            );
        }

        state.entries.push(LogEntry {
            sequence,
            log_id: self.log_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.last_hash = this_hash;

        debug!(log_id = %self.log_id, sequence, "check appended to log");
        Ok(())
    }
}
