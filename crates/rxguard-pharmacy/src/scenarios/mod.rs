//! Clinical reference scenarios.
//!
//! Each scenario is a fixed request with an expected outcome. Running them
//! against an engine confirms that the loaded reference data and the
//! engine's matching rules still agree on well-known cases.

pub mod clinical;

pub use clinical::{all_scenarios, run_scenario, Expectation, Scenario, ScenarioOutcome};
