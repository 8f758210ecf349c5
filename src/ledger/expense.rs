use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shared expense split equally among the users named in `split_between`.
///
/// User references are weak: nothing enforces that every name still exists
/// in the users collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupExpense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub split_between: Vec<String>,
    pub date: DateTime<Utc>,
}

impl GroupExpense {
    pub fn new(description: impl Into<String>, amount: f64, split_between: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            split_between,
            date: Utc::now(),
        }
    }

    /// The equal share each listed user owes for this expense.
    pub fn share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }
}
