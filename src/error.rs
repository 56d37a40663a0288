//!
//! Error types of the HMM crate
//!
use thiserror::Error;

///
/// Errors raised while building, sampling or decoding an HMM,
/// and while loading its tables.
///
#[derive(Error, Debug)]
pub enum HmmError {
    /// Structural inconsistency between the transition and emission tables
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// A row to sample from has zero total weight
    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// forward/viterbi called with no observations
    #[error("empty observation sequence")]
    EmptyObservationSequence,

    /// Probability value that is not a finite number in `[0, 1]`
    #[error("invalid probability `{0}`")]
    InvalidProbability(String),

    /// Malformed line of a table file
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O errors of the table/observation loader
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using HmmError
pub type Result<T> = std::result::Result<T, HmmError>;

impl HmmError {
    /// Create a malformed model error
    pub fn malformed(message: impl Into<String>) -> Self {
        HmmError::MalformedModel(message.into())
    }
    /// Create a degenerate distribution error
    pub fn degenerate(message: impl Into<String>) -> Self {
        HmmError::DegenerateDistribution(message.into())
    }
}
