//! Error types for the wager odds engine

#[cfg(feature = "python")]
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the wager odds engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BettingError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Outcome {outcome} not found in event {event}")]
    OutcomeNotFound { event: String, outcome: String },

    #[error("No outcomes configured")]
    NoOutcomes,

    #[error("Total weight is not positive")]
    ZeroTotalWeight,

    #[error("Total weight is not finite")]
    NonFiniteWeight,

    #[error("Duplicate event: {0}")]
    DuplicateEvent(String),

    #[error("Duplicate outcome {outcome} in event {event}")]
    DuplicateOutcome { event: String, outcome: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

/// Coarse classification of failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A requested color, event or outcome key does not exist.
    ConfigurationAbsent,
    /// No valid probability distribution exists.
    DegenerateMarket,
    /// Configuration was rejected while loading or registering.
    InvalidConfiguration,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::ConfigurationAbsent => "configuration_absent",
            ErrorCategory::DegenerateMarket => "degenerate_market",
            ErrorCategory::InvalidConfiguration => "invalid_configuration",
        }
    }
}

impl BettingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BettingError::UnknownColor(_)
            | BettingError::EventNotFound(_)
            | BettingError::OutcomeNotFound { .. } => ErrorCategory::ConfigurationAbsent,
            BettingError::NoOutcomes
            | BettingError::ZeroTotalWeight
            | BettingError::NonFiniteWeight => ErrorCategory::DegenerateMarket,
            BettingError::DuplicateEvent(_)
            | BettingError::DuplicateOutcome { .. }
            | BettingError::InvalidConfig(_)
            | BettingError::DeserializationError(_) => ErrorCategory::InvalidConfiguration,
        }
    }
}

impl From<serde_json::Error> for BettingError {
    fn from(err: serde_json::Error) -> Self {
        BettingError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<BettingError> for PyErr {
    fn from(err: BettingError) -> PyErr {
        match err.category() {
            ErrorCategory::ConfigurationAbsent => PyKeyError::new_err(err.to_string()),
            ErrorCategory::InvalidConfiguration => PyValueError::new_err(err.to_string()),
            ErrorCategory::DegenerateMarket => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the wager odds engine
pub type Result<T> = std::result::Result<T, BettingError>;
