//! Error types for the scenario engine.

use std::ops::Range;

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while parsing or selecting scenarios.
///
/// Parse errors are fatal: a broken scenario file must be fixed, the engine
/// never skips lines or recovers partially. A free-text response that matches
/// no answer is *not* an error; resolution returns `None` for that.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A line matched neither the answer nor the outcome pattern.
    #[error("{source_name}:{line}: cannot parse line {text:?}")]
    UnparseableLine {
        /// Name of the scenario source.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        /// Byte span of the line in the source text.
        span: Range<usize>,
    },

    /// An effect token named a kind that is not one of the four known kinds.
    #[error("{source_name}:{line}: unknown effect kind {kind:?} in token {token:?}")]
    UnknownEffect {
        /// Name of the scenario source.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// The full effect token.
        token: String,
        /// The unrecognized kind word.
        kind: String,
        /// Byte span of the containing line.
        span: Range<usize>,
    },

    /// An effect token mixed `+` and `-` sign characters.
    #[error("{source_name}:{line}: mixed signs in effect token {token:?}")]
    MixedSigns {
        /// Name of the scenario source.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// The full effect token.
        token: String,
        /// Byte span of the containing line.
        span: Range<usize>,
    },

    /// The source had no prompt line.
    #[error("scenario {source_name:?} has no prompt")]
    MissingPrompt {
        /// Name of the scenario source.
        source_name: String,
    },

    /// The source declared no answers.
    #[error("scenario {source_name:?} has no answers")]
    NoAnswers {
        /// Name of the scenario source.
        source_name: String,
    },

    /// An answer had no outcomes.
    #[error("answer {answer:?} in scenario {source_name:?} has no outcomes")]
    EmptyAnswer {
        /// Name of the scenario source.
        source_name: String,
        /// The answer text.
        answer: String,
    },

    /// The catalog holds no sources at all.
    #[error("no scenario sources available")]
    NoScenarios,

    /// An unknown source name was requested.
    #[error("no scenario source named {0:?}")]
    UnknownSource(String),

    /// The scenario directory could not be read.
    #[error("cannot read scenario directory: {0}")]
    Io(#[from] std::io::Error),
}

impl ScenarioError {
    /// Byte span of the offending line, for diagnostic rendering.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::UnparseableLine { span, .. }
            | Self::UnknownEffect { span, .. }
            | Self::MixedSigns { span, .. } => Some(span.clone()),
            _ => None,
        }
    }
}
