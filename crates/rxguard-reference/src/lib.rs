//! # rxguard-reference
//!
//! TOML-driven reference data for the RXGUARD interaction engine.
//!
//! ## Overview
//!
//! This crate provides [`InMemoryReferenceStore`], which implements the
//! [`ReferenceStore`](rxguard_core::traits::ReferenceStore) trait, and
//! [`AliasResolver`], which implements
//! [`DrugResolver`](rxguard_core::traits::DrugResolver). Both are built from
//! a [`ReferenceDataset`] declared in TOML.  A default dataset is bundled.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxguard_reference::{engine_for, ReferenceDataset};
//!
//! let dataset = ReferenceDataset::from_file(Path::new("reference.toml"))?;
//! let engine = engine_for(&dataset);
//! ```

pub mod alias;
pub mod dataset;
pub mod store;

use std::sync::Arc;

use rxguard_core::InteractionEngine;

pub use alias::AliasResolver;
pub use dataset::{ReferenceDataset, BUNDLED_DATASET};
pub use store::InMemoryReferenceStore;

/// Build an engine that looks up `dataset`'s tables and resolves its aliases.
pub fn engine_for(dataset: &ReferenceDataset) -> InteractionEngine {
    InteractionEngine::new(
        Arc::new(InMemoryReferenceStore::from_dataset(dataset)),
        Arc::new(AliasResolver::from_dataset(dataset)),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
