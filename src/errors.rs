use thiserror::Error;

/// Main error type for the creature battle engine.
///
/// Misses and blocked attacks are not errors; they come back as
/// [`crate::battle::attack::OutcomeKind`] values.
#[derive(Debug, Error)]
pub enum BattleError {
    /// A required argument was missing or violated a constructor invariant.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An index fell outside a collection's bounds.
    #[error("Out of range: {0}")]
    OutOfRange(String),
    /// A named attack, item or creature is not in the collection searched.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The action would break a state invariant.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// A type name outside the closed type enumeration.
    #[error("Invalid type: {0}")]
    InvalidType(String),
    /// A template document failed to parse.
    #[error("Template data error: {0}")]
    Template(#[from] ron::error::SpannedError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BattleError {
    pub(crate) fn invalid_argument(details: impl Into<String>) -> Self {
        BattleError::InvalidArgument(details.into())
    }

    pub(crate) fn out_of_range(details: impl Into<String>) -> Self {
        BattleError::OutOfRange(details.into())
    }

    pub(crate) fn not_found(details: impl Into<String>) -> Self {
        BattleError::NotFound(details.into())
    }

    pub(crate) fn invalid_operation(details: impl Into<String>) -> Self {
        BattleError::InvalidOperation(details.into())
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;
