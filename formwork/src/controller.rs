//! Form controller: one spec, one sink per field, events in, errors out.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::submit::{SubmitResult, Submitter};
use crate::validation::{
    FieldValues, FormSpec, Validatable, ValidationOutcome, ValidationResult,
};

/// Error constructing a form controller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ControllerError {
    /// A spec field has no bound sink.
    #[error("Spec field '{field}' has no bound sink")]
    UnboundField { field: String },

    /// A bound sink does not correspond to any spec field.
    #[error("Bound field '{field}' is not declared by spec '{spec}'")]
    UnknownField { field: String, spec: String },
}

/// Drives validation and error rendering for one form.
///
/// Constructed explicitly from a [`FormSpec`] and a complete set of bound
/// sinks; every operation works off that context, never off ambient
/// lookups. Each event is handled statelessly — the only state the
/// controller itself owns is the in-flight submission flag.
#[derive(Debug)]
pub struct FormController<V: Validatable> {
    spec: FormSpec,
    fields: BTreeMap<String, V>,
    busy: AtomicBool,
}

impl<V: Validatable> FormController<V> {
    /// Bind `spec` to its sinks. Every spec field must have exactly one
    /// sink and every sink must belong to the spec.
    pub fn new(spec: FormSpec, fields: BTreeMap<String, V>) -> Result<Self, ControllerError> {
        for rule in spec.rules() {
            if !fields.contains_key(&rule.field_id) {
                return Err(ControllerError::UnboundField {
                    field: rule.field_id.clone(),
                });
            }
        }
        for field_id in fields.keys() {
            if spec.rule(field_id).is_none() {
                return Err(ControllerError::UnknownField {
                    field: field_id.clone(),
                    spec: spec.name().to_string(),
                });
            }
        }
        Ok(Self {
            spec,
            fields,
            busy: AtomicBool::new(false),
        })
    }

    /// The bound spec.
    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    /// The sink bound to one field.
    pub fn field(&self, field_id: &str) -> Option<&V> {
        self.fields.get(field_id)
    }

    /// Snapshot of every field's current value.
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|(id, sink)| (id.clone(), sink.validation_value()))
            .collect()
    }

    /// Check if a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// The user typed into a required field: clear its stale error
    /// optimistically; the next blur or submit re-checks.
    pub fn on_input(&self, field_id: &str) {
        let Some(rule) = self.spec.rule(field_id) else {
            return;
        };
        if rule.required
            && let Some(sink) = self.fields.get(field_id)
        {
            sink.clear_error();
        }
    }

    /// A field lost focus: run its rule chain and render the outcome.
    ///
    /// A confirmation field's cross-field comparison is part of its own
    /// chain, so blurring it re-checks the pair against the joint values.
    pub fn on_blur(&self, field_id: &str) {
        let Some(rule) = self.spec.rule(field_id) else {
            return;
        };
        let values = self.values();
        let value = values.get(field_id).map(String::as_str).unwrap_or("");
        let outcome = rule.validate(value, &values);
        self.render_outcome(field_id, &outcome);
    }

    /// Render one field's outcome: set the error on failure, clear it on
    /// success.
    pub fn render_outcome(&self, field_id: &str, outcome: &ValidationOutcome) {
        let Some(sink) = self.fields.get(field_id) else {
            return;
        };
        if outcome.ok {
            sink.clear_error();
        } else {
            sink.set_error(outcome.message.clone().unwrap_or_default());
        }
    }

    /// Validate the whole form and render every field's outcome.
    pub fn validate(&self) -> ValidationResult {
        let values = self.values();
        let result = self.spec.validate_values(&values);
        for rule in self.spec.rules() {
            let Some(sink) = self.fields.get(&rule.field_id) else {
                continue;
            };
            match result.error_for(&rule.field_id) {
                Some(message) => sink.set_error(message),
                None => sink.clear_error(),
            }
        }
        if let ValidationResult::Invalid(errors) = &result {
            debug!(
                "form '{}': {} field error(s)",
                self.spec.name(),
                errors.len()
            );
        }
        result
    }

    /// Clear every field's error state. Idempotent.
    pub fn clear_all_errors(&self) {
        for sink in self.fields.values() {
            sink.clear_error();
        }
    }

    /// Run the full submit flow: validate, and on success hand the values
    /// to the collaborator.
    ///
    /// While the collaborator runs, further submissions are refused with
    /// [`SubmitResult::Busy`] — the disabled-submit-control semantics.
    /// Errors are cleared after an accepted submission; a rejecting
    /// collaborator gets its field errors rendered.
    pub async fn submit<S: Submitter + ?Sized>(&self, submitter: &S) -> SubmitResult {
        if self.busy.swap(true, Ordering::SeqCst) {
            warn!(
                "form '{}': submit refused, submission already in flight",
                self.spec.name()
            );
            return SubmitResult::Busy;
        }

        let result = self.validate();
        if result.is_invalid() {
            self.busy.store(false, Ordering::SeqCst);
            return SubmitResult::Rejected(result);
        }

        let values = self.values();
        let submitted = submitter.submit(&values).await;
        self.busy.store(false, Ordering::SeqCst);

        match submitted {
            Ok(outcome) => {
                if outcome.is_accepted() {
                    debug!("form '{}': submission accepted", self.spec.name());
                    self.clear_all_errors();
                } else {
                    debug!(
                        "form '{}': submission rejected by collaborator",
                        self.spec.name()
                    );
                    for error in outcome.field_errors() {
                        if let Some(sink) = self.fields.get(&error.field_id) {
                            sink.set_error(error.message.clone());
                        }
                    }
                }
                SubmitResult::Completed(outcome)
            }
            Err(e) => {
                warn!("form '{}': {}", self.spec.name(), e);
                SubmitResult::Failed(e)
            }
        }
    }
}
