use uuid::Uuid;

use super::valid_amount;
use crate::ledger::{Ledger, PersonalExpense};

/// Validated helpers for the personal-expense collection.
pub struct PersonalExpenseService;

impl PersonalExpenseService {
    /// Adds a personal expense dated now. Rejects a blank description or
    /// category and non-positive amounts.
    pub fn add(
        ledger: &mut Ledger,
        description: &str,
        amount: f64,
        category: &str,
    ) -> Option<Uuid> {
        let description = description.trim();
        let category = category.trim();
        if description.is_empty() || category.is_empty() || !valid_amount(amount) {
            return None;
        }
        let expense = PersonalExpense::new(description, amount, category);
        let id = expense.id;
        ledger.add_personal_expense(expense);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local};

    #[test]
    fn rejects_blank_category() {
        let mut ledger = Ledger::new();
        assert!(PersonalExpenseService::add(&mut ledger, "Lunch", 12.0, "  ").is_none());
        assert!(ledger.personal_expenses.is_empty());
    }

    #[test]
    fn captures_the_current_local_month() {
        let mut ledger = Ledger::new();
        PersonalExpenseService::add(&mut ledger, "Lunch", 12.0, "Food").unwrap();
        let expense = &ledger.personal_expenses[0];
        assert_eq!(expense.month, Local::now().month0());
        assert_eq!(expense.year, Local::now().year());
    }
}
