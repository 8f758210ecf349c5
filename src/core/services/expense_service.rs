use uuid::Uuid;

use super::valid_amount;
use crate::ledger::{GroupExpense, Ledger};

/// Validated helpers for the shared group-expense collection.
pub struct GroupExpenseService;

impl GroupExpenseService {
    /// Adds a shared expense split equally among `split_between`. Rejects a
    /// blank description, a non-positive amount, or an empty split set.
    pub fn add(
        ledger: &mut Ledger,
        description: &str,
        amount: f64,
        split_between: Vec<String>,
    ) -> Option<Uuid> {
        let description = description.trim();
        if description.is_empty() || !valid_amount(amount) || split_between.is_empty() {
            return None;
        }
        let expense = GroupExpense::new(description, amount, split_between);
        let id = expense.id;
        ledger.add_expense(expense);
        Some(id)
    }
}
