//! Form validation core.
//!
//! Rules are declarative data ([`FieldRule`] / [`FormSpec`]), evaluation is
//! pure, and rendering goes through the [`Validatable`] seam so the same
//! spec works against any field representation.
//!
//! # Example
//!
//! ```
//! use formwork::validation::FormSpec;
//!
//! let spec = FormSpec::builder("signup")
//!     .field("email", "Email").required().email()
//!     .field("password", "Password").required()
//!     .field("confirm", "Confirm Password").required().matches("password")
//!     .build()
//!     .unwrap();
//!
//! let mut values = formwork::validation::FieldValues::new();
//! values.insert("email".into(), "a@b.com".into());
//! values.insert("password".into(), "hunter2".into());
//! values.insert("confirm".into(), "hunter2".into());
//! assert!(spec.validate_values(&values).is_valid());
//! ```

mod result;
mod rule;
mod spec;
mod validatable;

pub use result::{FieldError, ValidationResult};
pub use rule::{FieldRule, FieldState, FieldValues, RuleKind, ValidationOutcome};
pub use spec::{FieldBuilder, FormSpec, FormSpecBuilder, SpecError};
pub use validatable::{ErrorDisplay, Validatable};
