//! Validated mutation services.
//!
//! Each `add` either commits a record and returns its id, or rejects the
//! input and returns `None` without touching any collection. Rejections are
//! deliberately silent: a local single-user tool keeps the form input on
//! screen instead of raising errors.

pub mod expense_service;
pub mod personal_service;
pub mod settlement_service;
pub mod user_service;

pub use expense_service::GroupExpenseService;
pub use personal_service::PersonalExpenseService;
pub use settlement_service::SettlementService;
pub use user_service::UserService;

/// True when the amount is usable as a positive monetary value.
pub(crate) fn valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}
