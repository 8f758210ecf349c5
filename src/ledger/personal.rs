use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single categorized personal expense.
///
/// `month` (0 = January), `year`, and `day` are captured from the local
/// calendar at creation time; `date` is the same instant in UTC. The split
/// fields exist so month/category reports never need timezone arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub date: DateTime<Utc>,
}

impl PersonalExpense {
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self::recorded_at(description, amount, category, Local::now())
    }

    /// Builds an expense as of a specific local timestamp.
    pub fn recorded_at(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        when: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category: category.into(),
            month: when.month0(),
            year: when.year(),
            day: when.day(),
            date: when.with_timezone(&Utc),
        }
    }
}
