//! Declarative specs for the product's forms.
//!
//! Field ids match the element ids used by the rendered pages, so specs
//! and markup stay aligned.

use formwork::validation::FormSpec;

/// Field ids shared between specs, flows, and the UI layer.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm-password";
    pub const UPI_ID: &str = "upiId";
    pub const WITHDRAWAL_AMOUNT: &str = "withdrawalAmount";
    pub const ADMIN_USERNAME: &str = "adminUsername";
    pub const ADMIN_PASSWORD: &str = "adminPassword";
    pub const AD_TITLE: &str = "adTitle";
    pub const REWARD_POINTS: &str = "rewardPoints";
}

/// Default minimum withdrawal amount, in points.
pub const DEFAULT_MIN_WITHDRAWAL: f64 = 50.0;

const UPI_MESSAGE: &str = "Please enter a valid UPI ID (e.g., yourname@upi).";

/// New-user registration: name, email, password with confirmation.
pub fn registration() -> FormSpec {
    FormSpec::builder("registration")
        .field(fields::FULL_NAME, "Full Name")
        .required()
        .field(fields::EMAIL, "Email")
        .required()
        .email()
        .field(fields::PASSWORD, "Password")
        .required()
        .field(fields::CONFIRM_PASSWORD, "Confirm Password")
        .required()
        .matches(fields::PASSWORD)
        .build()
        .expect("registration spec is well-formed")
}

/// Returning-user login.
pub fn login() -> FormSpec {
    FormSpec::builder("login")
        .field(fields::EMAIL, "Email")
        .required()
        .email()
        .field(fields::PASSWORD, "Password")
        .required()
        .build()
        .expect("login spec is well-formed")
}

/// Points withdrawal: UPI handle plus an amount with a floor.
pub fn withdrawal(min_amount: f64) -> FormSpec {
    FormSpec::builder("withdrawal")
        .field(fields::UPI_ID, "UPI ID")
        .required()
        .contains("@", UPI_MESSAGE)
        .field(fields::WITHDRAWAL_AMOUNT, "Withdrawal Amount")
        .required()
        .numeric_min(min_amount)
        .build()
        .expect("withdrawal spec is well-formed")
}

/// Admin panel login.
pub fn admin_login() -> FormSpec {
    FormSpec::builder("adminLogin")
        .field(fields::ADMIN_USERNAME, "Username")
        .required()
        .field(fields::ADMIN_PASSWORD, "Password")
        .required()
        .build()
        .expect("adminLogin spec is well-formed")
}

/// Task creation in the admin panel: ad title and its reward.
pub fn task() -> FormSpec {
    FormSpec::builder("task")
        .field(fields::AD_TITLE, "Ad Title")
        .required()
        .field(fields::REWARD_POINTS, "Reward Points")
        .required()
        .build()
        .expect("task spec is well-formed")
}
