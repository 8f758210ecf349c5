//! Pure derivation queries over the ledger collections.
//!
//! Inputs are small (tens to low hundreds of records), so every query is
//! recomputed from scratch on demand; nothing here caches.

use std::collections::BTreeMap;

use super::{ledger::Ledger, personal::PersonalExpense};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar month of the personal-expense series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub total: f64,
    pub count: usize,
}

/// Aggregate of one category's expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

/// Signed amount `user` owes the group, rounded to 2 decimal places.
///
/// Every group expense whose split names the user contributes an equal
/// share; every settlement by the user subtracts its amount. The single
/// signed total deliberately does not credit a payer for fronting an
/// expense; the simplification is inherited from the data model, which
/// records no payer.
pub fn balance_of(ledger: &Ledger, user: &str) -> f64 {
    let mut total = 0.0;
    for expense in &ledger.expenses {
        if expense.split_between.iter().any(|name| name == user) {
            total += expense.share();
        }
    }
    for settlement in &ledger.settlements {
        if settlement.user == user {
            total -= settlement.amount;
        }
    }
    (total * 100.0).round() / 100.0
}

/// Groups personal expenses by category, keeping record order within each
/// category. When `month_filter` is set, only expenses of that month
/// (0 = January) are considered.
pub fn expenses_by_category<'a>(
    expenses: &'a [PersonalExpense],
    month_filter: Option<u32>,
) -> BTreeMap<String, Vec<&'a PersonalExpense>> {
    let mut grouped: BTreeMap<String, Vec<&PersonalExpense>> = BTreeMap::new();
    for expense in expenses {
        if month_filter.is_some_and(|month| expense.month != month) {
            continue;
        }
        grouped
            .entry(expense.category.clone())
            .or_default()
            .push(expense);
    }
    grouped
}

/// Collapses a category grouping into per-category totals and counts.
pub fn category_totals(grouped: &BTreeMap<String, Vec<&PersonalExpense>>) -> Vec<CategoryTotal> {
    grouped
        .iter()
        .map(|(category, expenses)| CategoryTotal {
            category: category.clone(),
            total: expenses.iter().map(|expense| expense.amount).sum(),
            count: expenses.len(),
        })
        .collect()
}

/// Aggregates personal expenses into a fixed Jan-Dec series. Years are not
/// distinguished: an expense from March of any year lands in the "Mar"
/// bucket.
pub fn monthly_series(expenses: &[PersonalExpense]) -> Vec<MonthlyPoint> {
    (0..12)
        .map(|month| {
            let mut total = 0.0;
            let mut count = 0;
            for expense in expenses.iter().filter(|expense| expense.month == month) {
                total += expense.amount;
                count += 1;
            }
            MonthlyPoint {
                month: MONTH_LABELS[month as usize],
                total,
                count,
            }
        })
        .collect()
}

/// Short label for a month index (0 = January). Out-of-range indexes fall
/// back to "Jan" rather than panicking on corrupt stored data.
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS.get(month as usize).copied().unwrap_or("Jan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{GroupExpense, Settlement, User};
    use chrono::{Local, TimeZone};

    fn expense_in_month(amount: f64, category: &str, month: u32, year: i32) -> PersonalExpense {
        let when = Local
            .with_ymd_and_hms(year, month + 1, 10, 9, 30, 0)
            .unwrap();
        PersonalExpense::recorded_at("expense", amount, category, when)
    }

    #[test]
    fn balance_splits_equally_and_ignores_other_users() {
        let mut ledger = Ledger::new();
        ledger.add_user(User::new("A"));
        ledger.add_user(User::new("B"));
        ledger.add_user(User::new("C"));
        ledger.add_expense(GroupExpense::new(
            "Dinner",
            100.0,
            vec!["A".into(), "B".into()],
        ));

        assert_eq!(balance_of(&ledger, "A"), 50.0);
        assert_eq!(balance_of(&ledger, "B"), 50.0);
        assert_eq!(balance_of(&ledger, "C"), 0.0);
    }

    #[test]
    fn settlement_reduces_only_the_payers_balance() {
        let mut ledger = Ledger::new();
        ledger.add_expense(GroupExpense::new(
            "Groceries",
            90.0,
            vec!["A".into(), "B".into(), "C".into()],
        ));
        ledger.add_settlement(Settlement::new("A", 30.0));

        assert_eq!(balance_of(&ledger, "A"), 0.0);
        assert_eq!(balance_of(&ledger, "B"), 30.0);
    }

    #[test]
    fn balance_rounds_to_cents() {
        let mut ledger = Ledger::new();
        ledger.add_expense(GroupExpense::new(
            "Taxi",
            10.0,
            vec!["A".into(), "B".into(), "C".into()],
        ));
        assert_eq!(balance_of(&ledger, "A"), 3.33);
    }

    #[test]
    fn category_grouping_honors_the_month_filter() {
        let expenses = vec![
            expense_in_month(200.0, "Food", 3, 2024),
            expense_in_month(50.0, "Food", 3, 2024),
            expense_in_month(80.0, "Travel", 4, 2024),
        ];

        let grouped = expenses_by_category(&expenses, Some(3));
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["Food"].len(), 2);

        let totals = category_totals(&grouped);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, 250.0);
        assert_eq!(totals[0].count, 2);
    }

    #[test]
    fn monthly_series_spans_twelve_months_across_years() {
        let expenses = vec![
            expense_in_month(10.0, "Food", 0, 2023),
            expense_in_month(20.0, "Food", 0, 2024),
            expense_in_month(5.0, "Misc", 11, 2024),
        ];

        let series = monthly_series(&expenses);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[0].total, 30.0);
        assert_eq!(series[0].count, 2);
        assert_eq!(series[11].total, 5.0);
        let total_count: usize = series.iter().map(|point| point.count).sum();
        assert_eq!(total_count, expenses.len());
    }
}
