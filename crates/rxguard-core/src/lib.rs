//! # rxguard-core
//!
//! The interaction-checking engine for RXGUARD.
//!
//! This crate provides:
//! - The three collaborator traits (`ReferenceStore`, `DrugResolver`, `CheckRecorder`)
//! - The `InteractionEngine` that runs a check against them
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rxguard_core::{InteractionEngine, traits::IdentityResolver};
//!
//! let engine = InteractionEngine::new(Arc::new(store), Arc::new(IdentityResolver));
//! let result = engine.check_interactions(&request)?;
//! ```

pub mod engine;
pub mod traits;

pub use engine::InteractionEngine;
