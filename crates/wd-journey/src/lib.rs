//! The journey engine for Waddle.
//!
//! A [`Duck`] is the persisted character: its route, progress, stats, and
//! any scenario it is currently deciding. A [`Journey`] wraps a duck with
//! the non-persistent collaborators (scenario catalog, clock, seeded RNG,
//! config) and advances it one tick at a time. The duck snapshot
//! round-trips through JSON via [`store::DuckStore`].

/// Injectable clock for deterministic time.
pub mod clock;
/// Tunable journey constants.
pub mod config;
/// The persisted duck state.
pub mod duck;
/// Error types used throughout the crate.
pub mod error;
/// The advance state machine.
pub mod journey;
/// JSON snapshot storage.
pub mod store;

/// Re-export clock types.
pub use clock::{Clock, FixedClock, SystemClock};
/// Re-export the config.
pub use config::JourneyConfig;
/// Re-export duck types.
pub use duck::{Duck, JourneyOutcome, Phase};
/// Re-export error types.
pub use error::{JourneyError, JourneyResult};
/// Re-export the engine.
pub use journey::Journey;
/// Re-export the snapshot store.
pub use store::DuckStore;
