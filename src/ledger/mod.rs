//! Ledger domain records, the in-memory aggregate, and derivation queries.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod personal;
pub mod reports;
pub mod settlement;
pub mod user;

pub use expense::GroupExpense;
pub use ledger::{Collection, Ledger};
pub use personal::PersonalExpense;
pub use reports::{
    balance_of, category_totals, expenses_by_category, monthly_series, CategoryTotal, MonthlyPoint,
};
pub use settlement::Settlement;
pub use user::User;
