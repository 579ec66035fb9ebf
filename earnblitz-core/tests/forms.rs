//! End-to-end tests for the product forms and their submission flows.

use std::collections::BTreeMap;
use std::time::Duration;

use earnblitz_core::flows::{Acknowledger, AdminGate, TaskDesk, WithdrawalDesk};
use earnblitz_core::forms::{self, fields};
use formwork::controller::FormController;
use formwork::field::Field;
use formwork::submit::SubmitResult;
use formwork::validation::FormSpec;

fn controller(spec: FormSpec) -> FormController<Field> {
    let fields: BTreeMap<String, Field> = spec
        .rules()
        .iter()
        .map(|r| (r.field_id.clone(), Field::new(r.label.clone())))
        .collect();
    FormController::new(spec, fields).unwrap()
}

fn set(controller: &FormController<Field>, field_id: &str, value: &str) {
    controller.field(field_id).unwrap().set_value(value);
}

// ============================================================================
// Specs
// ============================================================================

#[test]
fn test_registration_password_mismatch_is_only_error() {
    let c = controller(forms::registration());
    set(&c, fields::FULL_NAME, "Ada Lovelace");
    set(&c, fields::EMAIL, "ada@example.com");
    set(&c, fields::PASSWORD, "abc123");
    set(&c, fields::CONFIRM_PASSWORD, "abc124");

    let result = c.validate();
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field_id, fields::CONFIRM_PASSWORD);
    assert_eq!(
        result.error_for(fields::CONFIRM_PASSWORD),
        Some("Passwords do not match.")
    );
}

#[test]
fn test_registration_matching_passwords_submittable() {
    let c = controller(forms::registration());
    set(&c, fields::FULL_NAME, "Ada Lovelace");
    set(&c, fields::EMAIL, "ada@example.com");
    set(&c, fields::PASSWORD, "abc123");
    set(&c, fields::CONFIRM_PASSWORD, "abc123");
    assert!(c.validate().is_valid());
}

#[test]
fn test_withdrawal_below_minimum() {
    let spec = forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL);
    let c = controller(spec);
    set(&c, fields::UPI_ID, "ada@upi");
    set(&c, fields::WITHDRAWAL_AMOUNT, "10");

    let result = c.validate();
    assert_eq!(
        result.error_for(fields::WITHDRAWAL_AMOUNT),
        Some("Minimum withdrawal amount is 50.")
    );
}

#[test]
fn test_withdrawal_above_minimum_passes() {
    let c = controller(forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL));
    set(&c, fields::UPI_ID, "ada@upi");
    set(&c, fields::WITHDRAWAL_AMOUNT, "60");

    let result = c.validate();
    assert_eq!(result.error_for(fields::WITHDRAWAL_AMOUNT), None);
}

#[test]
fn test_withdrawal_upi_without_handle_marker() {
    let c = controller(forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL));
    set(&c, fields::UPI_ID, "adaupi");
    set(&c, fields::WITHDRAWAL_AMOUNT, "60");

    let result = c.validate();
    assert_eq!(
        result.error_for(fields::UPI_ID),
        Some("Please enter a valid UPI ID (e.g., yourname@upi).")
    );
}

#[test]
fn test_login_rejects_bad_email() {
    let c = controller(forms::login());
    set(&c, fields::EMAIL, "ada@nowhere");
    set(&c, fields::PASSWORD, "hunter2");

    let result = c.validate();
    assert_eq!(
        result.error_for(fields::EMAIL),
        Some("Please enter a valid email address.")
    );
}

#[test]
fn test_admin_login_requires_both_fields() {
    let c = controller(forms::admin_login());
    let result = c.validate();
    assert_eq!(
        result.error_for(fields::ADMIN_USERNAME),
        Some("Username is required.")
    );
    assert_eq!(
        result.error_for(fields::ADMIN_PASSWORD),
        Some("Password is required.")
    );
}

#[test]
fn test_task_requires_title_and_points() {
    let c = controller(forms::task());
    set(&c, fields::REWARD_POINTS, "25");
    let result = c.validate();
    assert_eq!(
        result.error_for(fields::AD_TITLE),
        Some("Ad Title is required.")
    );
    assert_eq!(result.error_for(fields::REWARD_POINTS), None);
}

// ============================================================================
// Flows
// ============================================================================

#[tokio::test]
async fn test_admin_gate_rejects_wrong_credentials() {
    let c = controller(forms::admin_login());
    set(&c, fields::ADMIN_USERNAME, "admin");
    set(&c, fields::ADMIN_PASSWORD, "wrong");

    let gate = AdminGate::new("admin", "password").with_delay(Duration::ZERO);
    let result = c.submit(&gate).await;
    let SubmitResult::Completed(outcome) = result else {
        panic!("expected a completed submission");
    };
    assert!(!outcome.is_accepted());
    assert_eq!(outcome.message(), "Invalid credentials.");
    assert_eq!(
        c.field(fields::ADMIN_USERNAME).unwrap().error().as_deref(),
        Some("Invalid credentials.")
    );
    // Marker only, no second message.
    assert_eq!(
        c.field(fields::ADMIN_PASSWORD).unwrap().error().as_deref(),
        Some("")
    );
}

#[tokio::test]
async fn test_admin_gate_accepts_expected_pair() {
    let c = controller(forms::admin_login());
    set(&c, fields::ADMIN_USERNAME, "admin");
    set(&c, fields::ADMIN_PASSWORD, "password");

    let gate = AdminGate::new("admin", "password").with_delay(Duration::ZERO);
    let result = c.submit(&gate).await;
    assert!(result.is_accepted());
    assert!(!c.field(fields::ADMIN_USERNAME).unwrap().has_error());
}

#[tokio::test]
async fn test_withdrawal_desk_records_receipt() {
    let c = controller(forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL));
    set(&c, fields::UPI_ID, "ada@upi");
    set(&c, fields::WITHDRAWAL_AMOUNT, "75");

    let desk = WithdrawalDesk::new();
    let result = c.submit(&desk).await;
    let SubmitResult::Completed(outcome) = result else {
        panic!("expected a completed submission");
    };
    assert_eq!(
        outcome.message(),
        "Withdrawal request submitted successfully! It will be processed within 2-3 business days."
    );

    let receipts = desk.receipts();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].upi_id, "ada@upi");
    assert_eq!(receipts[0].amount, 75.0);
}

#[tokio::test]
async fn test_withdrawal_desk_rejected_below_minimum() {
    let c = controller(forms::withdrawal(forms::DEFAULT_MIN_WITHDRAWAL));
    set(&c, fields::UPI_ID, "ada@upi");
    set(&c, fields::WITHDRAWAL_AMOUNT, "10");

    let desk = WithdrawalDesk::new();
    let result = c.submit(&desk).await;
    assert!(matches!(result, SubmitResult::Rejected(_)));
    assert!(desk.receipts().is_empty());
}

#[tokio::test]
async fn test_task_desk_saves_task() {
    let c = controller(forms::task());
    set(&c, fields::AD_TITLE, "Watch: New Phone Launch");
    set(&c, fields::REWARD_POINTS, "25");

    let desk = TaskDesk::new().with_delay(Duration::ZERO);
    let result = c.submit(&desk).await;
    let SubmitResult::Completed(outcome) = result else {
        panic!("expected a completed submission");
    };
    assert_eq!(
        outcome.message(),
        "Task \"Watch: New Phone Launch\" with 25 points saved."
    );

    let tasks = desk.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Watch: New Phone Launch");
    assert_eq!(tasks[0].reward_points, "25");
}

#[tokio::test]
async fn test_acknowledger_reports_form_name() {
    let c = controller(forms::login());
    set(&c, fields::EMAIL, "ada@example.com");
    set(&c, fields::PASSWORD, "hunter2");

    let ack = Acknowledger::new("login");
    let result = c.submit(&ack).await;
    let SubmitResult::Completed(outcome) = result else {
        panic!("expected a completed submission");
    };
    assert_eq!(outcome.message(), "login submitted successfully.");
}
