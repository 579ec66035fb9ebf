//! Whole-form validation results.

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field the error belongs to.
    pub field_id: String,
    /// Message to render; may be empty when only the marker matters.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_id, self.message)
    }
}

/// Result of validating a whole form.
///
/// Every rule is checked, so `Invalid` carries all failures at once.
#[derive(Debug, Clone, Default)]
pub enum ValidationResult {
    /// Every field passed; the form is submittable.
    #[default]
    Valid,
    /// One or more fields failed.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All field errors, in spec order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// The first field error, if any.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The error message for one field, absent when the field passed.
    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field_id == field_id)
            .map(|e| e.message.as_str())
    }
}
