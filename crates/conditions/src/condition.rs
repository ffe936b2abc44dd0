use serde::{Deserialize, Serialize};

/// A single dependency condition over another field's value.
///
/// Conditions are stored as part of a field definition and are tagged by
/// `type` on the wire: `{"type": "startsWith", "dependencyName": "mode",
/// "value": "adv"}`. The expected value type is fixed per variant and
/// enforced during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Condition {
    /// Dependency has a value (not null, not missing, not an empty string).
    IsSet { dependency_name: String },
    /// Dependency is exactly the given boolean.
    Boolean { dependency_name: String, value: bool },
    /// Dependency string starts with the given prefix.
    StartsWith { dependency_name: String, value: String },
    /// Dependency string ends with the given suffix.
    EndsWith { dependency_name: String, value: String },
    /// Dependency string equals the given string.
    IsExactly { dependency_name: String, value: String },
    /// Dependency string contains the given substring.
    Contains { dependency_name: String, value: String },
    /// Dependency number is strictly greater than the threshold.
    Above { dependency_name: String, value: f64 },
    /// Dependency number is greater than or equal to the threshold.
    AboveOrEqual { dependency_name: String, value: f64 },
    /// Dependency number is strictly less than the threshold.
    Below { dependency_name: String, value: f64 },
    /// Dependency number is less than or equal to the threshold.
    BelowOrEqual { dependency_name: String, value: f64 },
    /// Dependency number equals the threshold exactly.
    Exactly { dependency_name: String, value: f64 },
}

/// The kind of a condition, without its payload.
///
/// This is what the input-type catalog hands to the form designer when
/// listing which conditions a field may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionKind {
    IsSet,
    Boolean,
    StartsWith,
    EndsWith,
    IsExactly,
    Contains,
    Above,
    AboveOrEqual,
    Below,
    BelowOrEqual,
    Exactly,
}

impl ConditionKind {
    /// Wire identifier, identical to the serde tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsSet => "isSet",
            Self::Boolean => "boolean",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::IsExactly => "isExactly",
            Self::Contains => "contains",
            Self::Above => "above",
            Self::AboveOrEqual => "aboveOrEqual",
            Self::Below => "below",
            Self::BelowOrEqual => "belowOrEqual",
            Self::Exactly => "exactly",
        }
    }

    /// The JSON value type this condition compares against.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::IsSet => "none",
            Self::Boolean => "boolean",
            Self::StartsWith | Self::EndsWith | Self::IsExactly | Self::Contains => "string",
            Self::Above | Self::AboveOrEqual | Self::Below | Self::BelowOrEqual | Self::Exactly => {
                "number"
            }
        }
    }
}

impl Condition {
    /// The kind of this condition.
    #[must_use]
    pub fn kind(&self) -> ConditionKind {
        match self {
            Self::IsSet { .. } => ConditionKind::IsSet,
            Self::Boolean { .. } => ConditionKind::Boolean,
            Self::StartsWith { .. } => ConditionKind::StartsWith,
            Self::EndsWith { .. } => ConditionKind::EndsWith,
            Self::IsExactly { .. } => ConditionKind::IsExactly,
            Self::Contains { .. } => ConditionKind::Contains,
            Self::Above { .. } => ConditionKind::Above,
            Self::AboveOrEqual { .. } => ConditionKind::AboveOrEqual,
            Self::Below { .. } => ConditionKind::Below,
            Self::BelowOrEqual { .. } => ConditionKind::BelowOrEqual,
            Self::Exactly { .. } => ConditionKind::Exactly,
        }
    }

    /// The field this condition inspects.
    #[must_use]
    pub fn dependency_name(&self) -> &str {
        match self {
            Self::IsSet { dependency_name }
            | Self::Boolean {
                dependency_name, ..
            }
            | Self::StartsWith {
                dependency_name, ..
            }
            | Self::EndsWith {
                dependency_name, ..
            }
            | Self::IsExactly {
                dependency_name, ..
            }
            | Self::Contains {
                dependency_name, ..
            }
            | Self::Above {
                dependency_name, ..
            }
            | Self::AboveOrEqual {
                dependency_name, ..
            }
            | Self::Below {
                dependency_name, ..
            }
            | Self::BelowOrEqual {
                dependency_name, ..
            }
            | Self::Exactly {
                dependency_name, ..
            } => dependency_name,
        }
    }
}

/// A field's stored condition set: either a bare condition or a list.
///
/// Field definitions persist both shapes, so both deserialize. An absent
/// value (the field declares no conditions) is represented by the host as
/// `None` and normalizes to the empty slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionOrConditions {
    Single(Condition),
    Multiple(Vec<Condition>),
}

impl ConditionOrConditions {
    /// View the stored conditions as a slice, without allocating.
    #[must_use]
    pub fn as_slice(&self) -> &[Condition] {
        match self {
            Self::Single(condition) => std::slice::from_ref(condition),
            Self::Multiple(conditions) => conditions,
        }
    }
}

impl From<Condition> for ConditionOrConditions {
    fn from(condition: Condition) -> Self {
        Self::Single(condition)
    }
}

impl From<Vec<Condition>> for ConditionOrConditions {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::Multiple(conditions)
    }
}

/// Normalize an optional condition-or-list to a flat slice.
///
/// `None` becomes the empty slice, a single condition a one-element slice,
/// and a list is passed through unchanged — no deduplication, no reordering.
#[must_use]
pub fn normalize_conditions(conditions: Option<&ConditionOrConditions>) -> &[Condition] {
    match conditions {
        None => &[],
        Some(conditions) => conditions.as_slice(),
    }
}
