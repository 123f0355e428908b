//! Choice lists for enum-backed fields.

use entity::{
    feedback::{MAX_RATING, MIN_RATING},
    sea_orm_active_enums::{EventStatus, EventType, Role, TargetAudience},
};
use sea_orm::{ActiveEnum, Iterable};
use serde::Serialize;

use crate::server::error::validation::ValidationError;

/// A stored code and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Value persisted in the column
    pub code: String,
    /// Human readable label
    pub label: String,
}

/// Enums whose variants carry an admin label.
pub trait ChoiceLabel {
    /// Label shown next to the stored code.
    fn choice_label(&self) -> &'static str;
}

impl ChoiceLabel for Role {
    fn choice_label(&self) -> &'static str {
        self.label()
    }
}

impl ChoiceLabel for EventType {
    fn choice_label(&self) -> &'static str {
        self.label()
    }
}

impl ChoiceLabel for EventStatus {
    fn choice_label(&self) -> &'static str {
        self.label()
    }
}

impl ChoiceLabel for TargetAudience {
    fn choice_label(&self) -> &'static str {
        self.label()
    }
}

/// Every variant of `E` in declaration order.
pub fn choices_of<E>() -> Vec<Choice>
where
    E: ActiveEnum<Value = String> + Iterable + ChoiceLabel,
{
    E::iter()
        .map(|variant| Choice {
            code: variant.to_value(),
            label: variant.choice_label().to_string(),
        })
        .collect()
}

/// Feedback ratings, each labelled with its own number.
pub fn rating_choices() -> Vec<Choice> {
    (MIN_RATING..=MAX_RATING)
        .map(|rating| Choice {
            code: rating.to_string(),
            label: rating.to_string(),
        })
        .collect()
}

/// Parses a submitted code into its enum variant.
///
/// Codes are matched exactly, `"pending"` is not a status.
pub fn parse_choice<E>(field: &'static str, code: &str) -> Result<E, ValidationError>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&code.to_string()).map_err(|_| ValidationError::InvalidChoice {
        field,
        value: code.to_string(),
    })
}
