//! Error types for donation validation

/// Errors raised when a donation is rejected before any mutation.
///
/// Validation failures are the only errors a donor-facing caller ever sees;
/// storage problems are handled inside the engine (see `bloom-engine`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("donation amount must be greater than zero")]
    NonPositiveAmount,

    #[error("donation amount is not a finite number")]
    AmountNotFinite,

    #[error("donation amount is too large to record")]
    AmountOutOfRange,

    #[error("donor email is not a valid address: {0}")]
    InvalidEmail(String),
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
