//! Declarative form specifications.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::result::{FieldError, ValidationResult};
use super::rule::{FieldRule, FieldValues, RuleKind};

/// Error in a form spec's structure, caught at build time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpecError {
    /// A match rule points at a field the spec does not declare.
    #[error("Field '{field}' matches unknown field '{target}'")]
    UnknownMatchTarget { field: String, target: String },

    /// A match rule points at its own field.
    #[error("Field '{field}' cannot match itself")]
    SelfMatch { field: String },

    /// Two rules share one field id.
    #[error("Duplicate field id '{field}'")]
    DuplicateField { field: String },
}

/// Named, ordered list of field rules for one form.
///
/// Built once at startup through [`FormSpec::builder`]; deserialized specs
/// should be re-checked with [`FormSpec::check`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    name: String,
    rules: Vec<FieldRule>,
}

impl FormSpec {
    /// Start building a spec for the named form.
    pub fn builder(name: impl Into<String>) -> FormSpecBuilder {
        FormSpecBuilder {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Form identity (e.g. `"registration"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// The rule for one field, if declared.
    pub fn rule(&self, field_id: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field_id == field_id)
    }

    /// Verify the spec's structural invariants.
    pub fn check(&self) -> Result<(), SpecError> {
        let mut ids = BTreeSet::new();
        for rule in &self.rules {
            if !ids.insert(rule.field_id.as_str()) {
                return Err(SpecError::DuplicateField {
                    field: rule.field_id.clone(),
                });
            }
        }
        for rule in &self.rules {
            if let RuleKind::MatchField(target) = &rule.kind {
                if *target == rule.field_id {
                    return Err(SpecError::SelfMatch {
                        field: rule.field_id.clone(),
                    });
                }
                if !ids.contains(target.as_str()) {
                    return Err(SpecError::UnknownMatchTarget {
                        field: rule.field_id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate a snapshot of values against every rule.
    ///
    /// No short-circuiting between fields: every error is collected so the
    /// caller can render them all at once. Cross-field rules compare the
    /// joint values, so confirmation correctness is always re-checked even
    /// when both fields pass on their own.
    pub fn validate_values(&self, values: &FieldValues) -> ValidationResult {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let value = values.get(&rule.field_id).map(String::as_str).unwrap_or("");
            let outcome = rule.validate(value, values);
            if !outcome.ok {
                errors.push(FieldError::new(
                    rule.field_id.clone(),
                    outcome.message.unwrap_or_default(),
                ));
            }
        }
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

/// Builder for a [`FormSpec`].
///
/// `field()` opens a [`FieldBuilder`] for one field; chain rule refinements
/// on it, then either open the next field or `build()`.
pub struct FormSpecBuilder {
    name: String,
    rules: Vec<FieldRule>,
}

impl FormSpecBuilder {
    /// Declare the next field.
    pub fn field(self, field_id: impl Into<String>, label: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            spec: self,
            rule: FieldRule::new(field_id, label),
        }
    }

    /// Finish, verifying the spec's invariants.
    pub fn build(self) -> Result<FormSpec, SpecError> {
        let spec = FormSpec {
            name: self.name,
            rules: self.rules,
        };
        spec.check()?;
        Ok(spec)
    }
}

/// Builder for one field's rule within a [`FormSpecBuilder`] chain.
pub struct FieldBuilder {
    spec: FormSpecBuilder,
    rule: FieldRule,
}

impl FieldBuilder {
    /// An empty value is an error for this field.
    pub fn required(mut self) -> Self {
        self.rule.required = true;
        self
    }

    /// Non-empty values must look like an email address.
    pub fn email(mut self) -> Self {
        self.rule.kind = RuleKind::Email;
        self
    }

    /// Value must parse as a decimal number no smaller than `min`.
    pub fn numeric_min(mut self, min: f64) -> Self {
        self.rule.kind = RuleKind::NumericMin(min);
        self
    }

    /// Raw value must equal the named field byte-for-byte.
    pub fn matches(mut self, target: impl Into<String>) -> Self {
        self.rule.kind = RuleKind::MatchField(target.into());
        self
    }

    /// Value must contain `needle`; failures render `message`.
    pub fn contains(mut self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule.kind = RuleKind::Contains {
            needle: needle.into(),
            message: message.into(),
        };
        self
    }

    /// Declare the next field.
    pub fn field(self, field_id: impl Into<String>, label: impl Into<String>) -> FieldBuilder {
        self.finalize().field(field_id, label)
    }

    /// Finish the spec, verifying its invariants.
    pub fn build(self) -> Result<FormSpec, SpecError> {
        self.finalize().build()
    }

    fn finalize(self) -> FormSpecBuilder {
        let mut spec = self.spec;
        spec.rules.push(self.rule);
        spec
    }
}
