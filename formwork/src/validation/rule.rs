//! Field-level rules and their pure evaluation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Snapshot of a form's current values, keyed by field id.
pub type FieldValues = BTreeMap<String, String>;

/// Shape check for email values: `local@domain.tld`. The pattern is the
/// contract; this is not an RFC address parser.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Semantic kind of a field, selecting its format check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Plain text; only required-ness applies.
    Text,
    /// Must look like an email address when non-empty.
    Email,
    /// Must parse as a decimal number no smaller than the minimum.
    NumericMin(f64),
    /// Raw value must equal the named sibling field byte-for-byte.
    MatchField(String),
    /// Value must contain the needle; failures render the rule's own message.
    Contains { needle: String, message: String },
}

/// One field's identity, required-ness, and format check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Stable field identifier within the form.
    pub field_id: String,
    /// Human-readable label, used in error messages.
    pub label: String,
    /// Whether an empty value is itself an error.
    pub required: bool,
    /// Format check applied after the required check.
    pub kind: RuleKind,
}

/// Transient per-field view computed during a validation run.
///
/// Derived from the current values on every run and discarded after the
/// outcome is rendered; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    /// Trimmed value is empty.
    pub is_empty: bool,
    /// The field's kind check failed.
    pub kind_violated: bool,
    /// A cross-field comparison failed.
    pub cross_field_violated: bool,
}

impl FieldState {
    /// Derive the state of `rule`'s field from `value` and its siblings.
    pub fn derive(rule: &FieldRule, value: &str, siblings: &FieldValues) -> Self {
        let trimmed = value.trim();
        let is_empty = trimmed.is_empty();

        let kind_violated = match &rule.kind {
            RuleKind::Text | RuleKind::MatchField(_) => false,
            RuleKind::Email => !is_empty && !EMAIL_PATTERN.is_match(trimmed),
            RuleKind::NumericMin(min) => match trimmed.parse::<f64>() {
                Ok(amount) => amount < *min,
                Err(_) => true,
            },
            RuleKind::Contains { needle, .. } => !value.contains(needle.as_str()),
        };

        // Raw comparison, not trimmed: confirmation must match byte-for-byte.
        let cross_field_violated = match &rule.kind {
            RuleKind::MatchField(target) => {
                let sibling = siblings.get(target).map(String::as_str).unwrap_or("");
                value != sibling
            }
            _ => false,
        };

        Self {
            is_empty,
            kind_violated,
            cross_field_violated,
        }
    }
}

/// Pass/fail of a single rule, with the message to render on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the field passed.
    pub ok: bool,
    /// Message to render next to the field when `ok` is false.
    pub message: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    /// A failing outcome carrying the message to render.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}

impl FieldRule {
    /// Create a plain-text, optional rule; the builder refines it.
    pub fn new(field_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            label: label.into(),
            required: false,
            kind: RuleKind::Text,
        }
    }

    /// Evaluate this rule against a value and its sibling values.
    ///
    /// Pure: rendering is the caller's job. Checks run in a fixed order
    /// (required, then kind, then cross-field) and the first failure wins.
    pub fn validate(&self, value: &str, siblings: &FieldValues) -> ValidationOutcome {
        let state = FieldState::derive(self, value, siblings);

        if self.required && state.is_empty {
            return ValidationOutcome::fail(format!("{} is required.", self.label));
        }

        if state.kind_violated {
            match &self.kind {
                RuleKind::Email => {
                    return ValidationOutcome::fail("Please enter a valid email address.");
                }
                RuleKind::NumericMin(min) => {
                    return ValidationOutcome::fail(format!(
                        "Minimum withdrawal amount is {min}."
                    ));
                }
                RuleKind::Contains { message, .. } => {
                    return ValidationOutcome::fail(message.clone());
                }
                RuleKind::Text | RuleKind::MatchField(_) => {}
            }
        }

        if state.cross_field_violated {
            return ValidationOutcome::fail("Passwords do not match.");
        }

        ValidationOutcome::pass()
    }
}
