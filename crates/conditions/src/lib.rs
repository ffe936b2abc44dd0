//! Visibility/dependency conditions for dynamic form fields.
//!
//! A field may declare that it is only active while another field's current
//! value satisfies one or more conditions. This crate owns the condition
//! vocabulary, its structural validation, the per-input-type catalog of
//! applicable conditions, and the evaluator that turns a field's conditions
//! plus a form-values snapshot into a boolean.

pub mod condition;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod schema;

pub mod prelude {
    pub use crate::condition::{
        Condition, ConditionKind, ConditionOrConditions, normalize_conditions,
    };
    pub use crate::error::ConditionError;
    pub use crate::evaluate::{
        FormValues, dependency_names, value_meets_condition, values_meet_conditions,
    };
    pub use crate::input::InputKind;
    pub use crate::schema::{validate_condition, validate_conditions};
}
