//! Simulated submission collaborators.
//!
//! Each flow sleeps for a fixed duration standing in for network latency,
//! then decides. Nothing here talks to a real backend; accepted records
//! live in memory only.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formwork::submit::{SubmitError, SubmitOutcome, Submitter};
use formwork::validation::{FieldError, FieldValues};
use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use crate::forms::fields;

fn field_value<'a>(values: &'a FieldValues, field_id: &str) -> &'a str {
    values.get(field_id).map(String::as_str).unwrap_or("")
}

/// Generic acknowledging collaborator for forms whose submission has no
/// backend behavior of its own (registration, login).
pub struct Acknowledger {
    form_name: String,
    delay: Duration,
}

impl Acknowledger {
    pub fn new(form_name: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
            delay: Duration::ZERO,
        }
    }

    /// Use a fixed latency before acknowledging.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Submitter for Acknowledger {
    async fn submit(&self, _values: &FieldValues) -> Result<SubmitOutcome, SubmitError> {
        tokio::time::sleep(self.delay).await;
        debug!("{} submitted", self.form_name);
        Ok(SubmitOutcome::accepted(format!(
            "{} submitted successfully.",
            self.form_name
        )))
    }
}

/// A withdrawal request accepted by [`WithdrawalDesk`].
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub upi_id: String,
    pub amount: f64,
    pub requested_at: DateTime<Utc>,
}

/// Accepts withdrawal requests and keeps an in-memory receipt log.
pub struct WithdrawalDesk {
    delay: Duration,
    receipts: RwLock<Vec<Receipt>>,
}

impl WithdrawalDesk {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            receipts: RwLock::new(Vec::new()),
        }
    }

    /// Use a fixed latency before accepting.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Receipts accepted so far, oldest first.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for WithdrawalDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for WithdrawalDesk {
    async fn submit(&self, values: &FieldValues) -> Result<SubmitOutcome, SubmitError> {
        tokio::time::sleep(self.delay).await;

        // Values already passed validation; a non-numeric amount here means
        // the caller bypassed phase one.
        let amount: f64 = field_value(values, fields::WITHDRAWAL_AMOUNT)
            .trim()
            .parse()
            .map_err(|_| SubmitError::new("withdrawal amount is not numeric"))?;

        let receipt = Receipt {
            id: Uuid::new_v4(),
            upi_id: field_value(values, fields::UPI_ID).to_string(),
            amount,
            requested_at: Utc::now(),
        };
        info!(
            "withdrawal request {} for {} points to {}",
            receipt.id, receipt.amount, receipt.upi_id
        );
        if let Ok(mut guard) = self.receipts.write() {
            guard.push(receipt);
        }

        Ok(SubmitOutcome::accepted(
            "Withdrawal request submitted successfully! It will be processed within 2-3 business days.",
        ))
    }
}

/// Admin login gate comparing submitted credentials against a configured
/// pair. A mismatch comes back as field errors, not as an `Err`.
pub struct AdminGate {
    username: String,
    password: String,
    delay: Duration,
}

impl AdminGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            delay: Duration::from_millis(1000),
        }
    }

    /// Use a different processing latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Submitter for AdminGate {
    async fn submit(&self, values: &FieldValues) -> Result<SubmitOutcome, SubmitError> {
        tokio::time::sleep(self.delay).await;

        let username = field_value(values, fields::ADMIN_USERNAME);
        let password = field_value(values, fields::ADMIN_PASSWORD);
        if username == self.username && password == self.password {
            info!("admin login for '{username}'");
            return Ok(SubmitOutcome::accepted("Admin login successful."));
        }

        debug!("admin login failed for '{username}'");
        Ok(SubmitOutcome::rejected(
            "Invalid credentials.",
            vec![
                FieldError::new(fields::ADMIN_USERNAME, "Invalid credentials."),
                // The password field only gets the error marker.
                FieldError::new(fields::ADMIN_PASSWORD, ""),
            ],
        ))
    }
}

/// A task definition saved by [`TaskDesk`].
#[derive(Debug, Clone, Serialize)]
pub struct AdTask {
    pub id: Uuid,
    pub title: String,
    pub reward_points: String,
}

/// Saves ad-task definitions from the admin panel into memory.
pub struct TaskDesk {
    delay: Duration,
    tasks: RwLock<Vec<AdTask>>,
}

impl TaskDesk {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1200),
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// Use a different processing latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Tasks saved so far, oldest first.
    pub fn tasks(&self) -> Vec<AdTask> {
        self.tasks
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for TaskDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for TaskDesk {
    async fn submit(&self, values: &FieldValues) -> Result<SubmitOutcome, SubmitError> {
        tokio::time::sleep(self.delay).await;

        let title = field_value(values, fields::AD_TITLE).to_string();
        let reward_points = field_value(values, fields::REWARD_POINTS).to_string();
        let message = format!("Task \"{title}\" with {reward_points} points saved.");

        let task = AdTask {
            id: Uuid::new_v4(),
            title,
            reward_points,
        };
        info!("task {} saved: {}", task.id, task.title);
        if let Ok(mut guard) = self.tasks.write() {
            guard.push(task);
        }

        Ok(SubmitOutcome::accepted(message))
    }
}
