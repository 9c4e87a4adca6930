//! The scenario engine for Waddle.
//!
//! Scenarios are small plain-text files: a prompt on the first line,
//! `<answer>` headers, and weighted outcome lines with effect tokens like
//! `++speed` or `-motivation`. This crate parses that format into validated
//! types, picks random scenarios from a catalog, and resolves free-text
//! responses to weighted-random outcomes.

/// Named scenario sources and random selection.
pub mod catalog;
/// Ariadne rendering of parse errors.
pub mod diagnostics;
/// Typed stat-change descriptors and their token syntax.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// The line parser for the scenario text format.
pub mod parser;
/// Scenario, answer, and outcome types plus resolution.
pub mod scenario;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export effect types.
pub use effect::{Effect, EffectKind};
/// Re-export error types.
pub use error::{ScenarioError, ScenarioResult};
/// Re-export the parser entry point.
pub use parser::parse_scenario;
/// Re-export the scenario types.
pub use scenario::{Answer, Outcome, Scenario};
