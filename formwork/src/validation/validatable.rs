//! Seam between validation and whatever renders the form.

/// Where a field's error message is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Message below the field (default).
    #[default]
    Below,
    /// Message next to the field.
    Inline,
    /// No message; the field only carries error styling.
    None,
}

/// A bound form field as the validation layer sees it.
///
/// The controller reads the current value through this trait and pushes
/// error state back through it; nothing else about the field's
/// representation matters. [`Field`](crate::field::Field) is the provided
/// implementation; UI layers can supply their own.
pub trait Validatable: Send + Sync {
    /// Current value, as entered.
    fn validation_value(&self) -> String;

    /// Mark the field as failed and set the message to render.
    fn set_error(&self, msg: impl Into<String>);

    /// Clear the error marker and message.
    fn clear_error(&self);

    /// Whether the field currently carries an error.
    fn has_error(&self) -> bool;

    /// The current error message, if any.
    fn error(&self) -> Option<String>;

    /// How the error message is displayed.
    fn error_display(&self) -> ErrorDisplay;

    /// Set how the error message is displayed.
    fn set_error_display(&self, display: ErrorDisplay);
}
