//! # rxguard-verify
//!
//! Input and reference-data verification for RXGUARD.
//!
//! This crate provides:
//!
//! 1. [`request::RequestValidator`]: JSON Schema validation of raw check
//!    requests via the `jsonschema` crate, failing fast with
//!    `RxError::InvalidInput` on any shape violation.
//! 2. [`lint::lint_dataset`]: consistency rules over a `ReferenceDataset`
//!    (blank names, self-pairs, duplicates, alias problems).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxguard_verify::request::RequestValidator;
//!
//! let validator = RequestValidator::new()?;
//! let request = validator.parse(r#"{ "drugNames": ["Warfarin", "Aspirin"] }"#)?;
//! ```

pub mod lint;
pub mod request;

pub use lint::{lint_dataset, LintFinding, LintLevel, LintReport};
pub use request::RequestValidator;

// ── Tests ─────────────────────────────────────────────────────────────────────
