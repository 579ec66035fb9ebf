//! Shared-state handle for one form field.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, Validatable};

#[derive(Debug, Default)]
struct FieldInner {
    value: String,
    label: String,
    error: Option<String>,
    error_display: ErrorDisplay,
}

/// A form field backed by shared state.
///
/// `Field` holds the value the user has entered plus the field's current
/// error state. Cloning yields another handle to the same field, so a UI
/// layer and a [`FormController`](crate::controller::FormController) can
/// hold it at the same time. Changing the value clears any stale error; a
/// dirty flag tells render loops when the field needs repainting.
#[derive(Debug)]
pub struct Field {
    inner: Arc<RwLock<FieldInner>>,
    dirty: Arc<AtomicBool>,
}

impl Field {
    /// Create an empty field with a human-readable label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FieldInner {
                label: label.into(),
                ..FieldInner::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with an initial value.
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        let field = Self::new(label);
        field.set_value(value);
        field.clear_dirty();
        field
    }

    /// The field's label.
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the value is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Replace the value. Stale error state is cleared.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value and any error.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the field changed since the last repaint.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Acknowledge a repaint.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Mark the field as failed with a message.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the error marker and message.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the field carries an error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// The current error message, if any.
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// How the error message is displayed.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set how the error message is displayed.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Validatable for Field {
    fn validation_value(&self) -> String {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        Field::set_error(self, msg)
    }

    fn clear_error(&self) {
        Field::clear_error(self)
    }

    fn has_error(&self) -> bool {
        Field::has_error(self)
    }

    fn error(&self) -> Option<String> {
        Field::error(self)
    }

    fn error_display(&self) -> ErrorDisplay {
        Field::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        Field::set_error_display(self, display)
    }
}
