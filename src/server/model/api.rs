use serde::{Deserialize, Serialize};

/// Error payload shown by the admin console on a create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrorDto {
    /// The field the error belongs to, `None` for form-wide errors
    pub field: Option<String>,
    /// The error message
    pub error: String,
}
