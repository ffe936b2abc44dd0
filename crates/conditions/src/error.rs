/// Error type for structural condition validation.
///
/// Raised only by the schema validators when raw input does not match any
/// known condition shape. Evaluation never errors: a value of the wrong
/// runtime type simply fails the condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// Raw value is not a structurally valid condition.
    #[error("invalid condition: {reason}")]
    InvalidCondition { reason: String },

    /// An element of a condition list failed validation.
    #[error("invalid condition at index {index}: {reason}")]
    InvalidElement { index: usize, reason: String },
}

impl ConditionError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidCondition { .. } => "CONDITION_INVALID",
            Self::InvalidElement { .. } => "CONDITION_INVALID_ELEMENT",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Validation is deterministic, so always `false`.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
