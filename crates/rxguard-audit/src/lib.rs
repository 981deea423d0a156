//! # rxguard-audit
//!
//! Append-only, SHA-256 hash-chained log of interaction checks.
//!
//! ## Overview
//!
//! Every recorded check is wrapped in a `LogEntry` that links to the
//! previous entry via its SHA-256 hash.  Editing any entry after the fact
//! breaks the chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rxguard_audit::InMemoryCheckLog;
//!
//! let log = InMemoryCheckLog::new("pharmacy-main");
//! let record = engine.check_and_record(&request, &log)?;
//! assert!(log.verify_integrity());
//! ```

pub mod chain;
pub mod entry;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use entry::{CheckLogExport, LogEntry};
pub use memory::InMemoryCheckLog;

// ── Tests ─────────────────────────────────────────────────────────────────────
