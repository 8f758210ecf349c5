use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payment made by `user` that reduces their outstanding group balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: Uuid,
    pub user: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl Settlement {
    pub fn new(user: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            amount,
            date: Utc::now(),
        }
    }
}
