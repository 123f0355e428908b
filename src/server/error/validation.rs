use thiserror::Error;

/// Field-level validation failures, shown by the admin console next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{field}: this field is required")]
    Required {
        /// Field name
        field: &'static str,
    },
    /// A text field exceeds its column length.
    #[error("{field}: ensure this value has at most {max} characters ({actual} given)")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum number of characters
        max: usize,
        /// Number of characters submitted
        actual: usize,
    },
    /// An integer field is outside its allowed range.
    #[error("{field}: {value} is not between {min} and {max}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Submitted value
        value: i64,
        /// Lowest accepted value
        min: i64,
        /// Highest accepted value
        max: i64,
    },
    /// A fixed-point field does not fit its column after rounding.
    #[error("{field}: {value} is not between {min} and {max}")]
    DecimalOutOfRange {
        /// Field name
        field: &'static str,
        /// Submitted value
        value: String,
        /// Lowest accepted value
        min: String,
        /// Highest accepted value
        max: String,
    },
    /// A choice field received a code outside its declared choice set.
    #[error("{field}: {value:?} is not one of the available choices")]
    InvalidChoice {
        /// Field name
        field: &'static str,
        /// Submitted code
        value: String,
    },
}

impl ValidationError {
    /// Name of the field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::DecimalOutOfRange { field, .. }
            | Self::InvalidChoice { field, .. } => field,
        }
    }
}
