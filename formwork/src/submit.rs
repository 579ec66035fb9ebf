//! Two-phase submission: validation gates entry, a collaborator owns
//! phase two.
//!
//! Phase one is [`FormController::validate`](crate::controller::FormController::validate),
//! synchronous and deterministic. Phase two is whatever the product does
//! with a validated form — here abstracted as [`Submitter`]. User-input
//! problems are never `Err`: a collaborator that dislikes the values
//! rejects them with field errors on the [`SubmitOutcome`].

use async_trait::async_trait;

use crate::validation::{FieldError, FieldValues, ValidationResult};

/// Failure of the submission collaborator itself.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Submission failed: {message}")]
pub struct SubmitError {
    /// What went wrong, for the surrounding UI to surface.
    pub message: String,
}

impl SubmitError {
    /// Creates a new submission error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What a collaborator decided about a validated submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Submission went through.
    Accepted {
        /// Status message for the user.
        message: String,
    },
    /// The collaborator turned the values down.
    Rejected {
        /// Status message for the user.
        message: String,
        /// Per-field errors to render, possibly with empty messages when
        /// only the marker matters.
        field_errors: Vec<FieldError>,
    },
}

impl SubmitOutcome {
    /// An accepted submission with a status message.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self::Accepted {
            message: message.into(),
        }
    }

    /// A rejected submission with field errors to render.
    pub fn rejected(message: impl Into<String>, field_errors: Vec<FieldError>) -> Self {
        Self::Rejected {
            message: message.into(),
            field_errors,
        }
    }

    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The collaborator's status message.
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message } | Self::Rejected { message, .. } => message,
        }
    }

    /// Field errors attached to a rejection.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { field_errors, .. } => field_errors,
        }
    }
}

/// Outcome of driving a whole submit flow through a controller.
#[derive(Debug)]
pub enum SubmitResult {
    /// Phase one failed; the submission was withheld.
    Rejected(ValidationResult),
    /// A submission is already in flight; this one was refused.
    Busy,
    /// The collaborator ran and decided.
    Completed(SubmitOutcome),
    /// The collaborator itself failed.
    Failed(SubmitError),
}

impl SubmitResult {
    /// Whether the flow ended in an accepted submission.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Completed(outcome) if outcome.is_accepted())
    }
}

/// Phase two of a submission, owned by an external collaborator.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Handle values that already passed validation.
    async fn submit(&self, values: &FieldValues) -> Result<SubmitOutcome, SubmitError>;
}
