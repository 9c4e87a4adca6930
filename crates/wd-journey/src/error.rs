//! Error types for the journey engine.

use thiserror::Error;

/// Result type for journey operations.
pub type JourneyResult<T> = Result<T, JourneyError>;

/// Errors that can occur while advancing or persisting a journey.
///
/// A response that matches no answer, or a tick before the timer has
/// elapsed, is *not* an error; `advance` returns `Ok(None)` for those.
#[derive(Debug, Error)]
pub enum JourneyError {
    /// The duck already succeeded or failed; check the phase before
    /// advancing.
    #[error("this duck's journey is already over")]
    AlreadyFinished,

    /// A successor was requested from a duck that is still travelling.
    #[error("cannot hatch a successor from an unfinished duck")]
    NotFinished,

    /// A scenario source failed to parse or be selected.
    #[error(transparent)]
    Scenario(#[from] wd_scenario::ScenarioError),

    /// Route construction failed.
    #[error(transparent)]
    Route(#[from] wd_route::RouteError),

    /// Snapshot storage I/O failed.
    #[error("snapshot store: {0}")]
    Store(#[from] std::io::Error),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
