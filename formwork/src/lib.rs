//! Declarative form validation with pluggable error rendering.
//!
//! A [`validation::FormSpec`] describes the fields of one form and their
//! rules. A [`controller::FormController`] binds that spec to a set of
//! [`field::Field`] sinks (or any other [`validation::Validatable`]
//! implementation), turns UI events into validation runs, and gates the
//! hand-off to an external [`submit::Submitter`].

pub mod controller;
pub mod field;
pub mod submit;
pub mod validation;

pub mod prelude {
    pub use crate::controller::{ControllerError, FormController};
    pub use crate::field::Field;
    pub use crate::submit::{SubmitError, SubmitOutcome, SubmitResult, Submitter};
    pub use crate::validation::{
        ErrorDisplay, FieldBuilder, FieldError, FieldRule, FieldValues, FormSpec,
        FormSpecBuilder, RuleKind, SpecError, Validatable, ValidationOutcome, ValidationResult,
    };
}
