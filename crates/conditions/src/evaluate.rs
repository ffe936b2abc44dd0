//! Condition evaluation against a form-values snapshot.
//!
//! Pure and total: evaluation never errors. A value whose runtime type does
//! not match the condition fails the condition, it does not crash.

use std::collections::HashMap;

use serde_json::Value;

use crate::condition::{Condition, ConditionOrConditions, normalize_conditions};

/// Snapshot of current form values, owned by the host form engine.
///
/// A field that has no value yet is simply absent; for evaluation that is
/// equivalent to a stored `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: HashMap<String, Value>,
}

impl FormValues {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field's current value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Set a field value (builder-style, consuming).
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Set a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Whether the snapshot has any value (including null) for the field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// All values as a map reference.
    #[must_use]
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }
}

impl FromIterator<(String, Value)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Value>> for FormValues {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

/// Evaluate a single condition against a concrete value.
///
/// A missing field should be passed as [`Value::Null`]; absence and null are
/// indistinguishable to every condition. The dispatch is an exhaustive
/// `match`, so adding a condition variant forces this site to be updated.
#[must_use]
pub fn value_meets_condition(condition: &Condition, value: &Value) -> bool {
    match condition {
        Condition::IsSet { .. } => match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            // Numeric 0 and boolean false still count as set.
            _ => true,
        },
        Condition::Boolean {
            value: expected, ..
        } => value.as_bool() == Some(*expected),
        Condition::StartsWith { value: prefix, .. } => {
            value.as_str().is_some_and(|s| s.starts_with(prefix.as_str()))
        }
        Condition::EndsWith { value: suffix, .. } => {
            value.as_str().is_some_and(|s| s.ends_with(suffix.as_str()))
        }
        Condition::IsExactly {
            value: expected, ..
        } => value.as_str() == Some(expected.as_str()),
        Condition::Contains { value: needle, .. } => {
            value.as_str().is_some_and(|s| s.contains(needle.as_str()))
        }
        Condition::Above {
            value: threshold, ..
        } => numeric(value).is_some_and(|n| n > *threshold),
        Condition::AboveOrEqual {
            value: threshold, ..
        } => numeric(value).is_some_and(|n| n >= *threshold),
        Condition::Below {
            value: threshold, ..
        } => numeric(value).is_some_and(|n| n < *threshold),
        Condition::BelowOrEqual {
            value: threshold, ..
        } => numeric(value).is_some_and(|n| n <= *threshold),
        Condition::Exactly {
            value: expected, ..
        } => numeric(value).is_some_and(|n| n == *expected),
    }
}

/// Evaluate a field's condition set against a form-values snapshot.
///
/// AND semantics with short-circuit: every normalized condition must hold
/// against the value of its dependency field. An empty set is vacuously true
/// (unconditional visibility). A dependency missing from the snapshot
/// evaluates as null, which fails every condition.
#[must_use]
pub fn values_meet_conditions(
    conditions: Option<&ConditionOrConditions>,
    form_values: &FormValues,
) -> bool {
    normalize_conditions(conditions).iter().all(|condition| {
        match form_values.get(condition.dependency_name()) {
            Some(value) => value_meets_condition(condition, value),
            None => value_meets_condition(condition, &Value::Null),
        }
    })
}

/// The dependency fields referenced by a set of conditions, sorted and
/// deduplicated. Hosts use this to know which value changes require
/// re-evaluating a field's visibility.
#[must_use]
pub fn dependency_names(conditions: &[Condition]) -> Vec<&str> {
    let mut names: Vec<&str> = conditions.iter().map(Condition::dependency_name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn numeric(value: &Value) -> Option<f64> {
    // Only JSON numbers qualify; no coercion from strings or booleans.
    value.as_f64()
}
