//! Structural validation of raw condition values.
//!
//! Stored field definitions arrive as untyped JSON. These validators parse
//! them into the closed [`Condition`] vocabulary, rejecting unknown tags,
//! missing `dependencyName`, and mistyped `value` payloads. No partial or
//! best-effort parse is produced.

use serde_json::Value;

use crate::condition::Condition;
use crate::error::ConditionError;

/// Validate a raw value as a single condition.
pub fn validate_condition(raw: &Value) -> Result<Condition, ConditionError> {
    serde_json::from_value(raw.clone()).map_err(|err| ConditionError::InvalidCondition {
        reason: err.to_string(),
    })
}

/// Validate a raw value as a condition or a list of conditions.
///
/// A bare object yields a one-element list; an array validates each element
/// independently and reports the index of the first invalid one. An empty
/// array is valid and means "no conditions".
pub fn validate_conditions(raw: &Value) -> Result<Vec<Condition>, ConditionError> {
    match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                validate_condition(item).map_err(|err| match err {
                    ConditionError::InvalidCondition { reason } => {
                        ConditionError::InvalidElement { index, reason }
                    }
                    other => other,
                })
            })
            .collect(),
        _ => validate_condition(raw).map(|condition| vec![condition]),
    }
}
