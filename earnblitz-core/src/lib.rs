//! Core domain for the EarnBlitz rewards product.
//!
//! Declarative specs for the product's forms, the simulated submission
//! collaborators behind them, and the ad-watch countdown that gates reward
//! claims. Validation itself lives in the `formwork` crate; this crate
//! only supplies the product's concrete forms and flows.

pub mod countdown;
pub mod flows;
pub mod forms;
