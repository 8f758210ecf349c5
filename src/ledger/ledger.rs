use chrono::{DateTime, Utc};

use super::{expense::GroupExpense, personal::PersonalExpense, settlement::Settlement, user::User};

/// Names one of the four record collections. Used to tag change
/// notifications and to address the matching durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    GroupExpenses,
    PersonalExpenses,
    Settlements,
}

impl Collection {
    /// The durable store name for this collection.
    pub fn store_name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::GroupExpenses => "expenses",
            Collection::PersonalExpenses => "personalExpenses",
            Collection::Settlements => "settlements",
        }
    }
}

/// The in-memory aggregate holding all four collections. This is the single
/// authoritative copy; storage only ever mirrors it.
///
/// The `add_*` helpers append unconditionally; validation lives in the
/// services layer.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub users: Vec<User>,
    pub expenses: Vec<GroupExpense>,
    pub personal_expenses: Vec<PersonalExpense>,
    pub settlements: Vec<Settlement>,
    updated_at: Option<DateTime<Utc>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the aggregate from previously stored collections.
    pub fn from_collections(
        users: Vec<User>,
        expenses: Vec<GroupExpense>,
        personal_expenses: Vec<PersonalExpense>,
        settlements: Vec<Settlement>,
    ) -> Self {
        Self {
            users,
            expenses,
            personal_expenses,
            settlements,
            updated_at: None,
        }
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
        self.touch();
    }

    pub fn add_expense(&mut self, expense: GroupExpense) {
        self.expenses.push(expense);
        self.touch();
    }

    pub fn add_personal_expense(&mut self, expense: PersonalExpense) {
        self.personal_expenses.push(expense);
        self.touch();
    }

    pub fn add_settlement(&mut self, settlement: Settlement) {
        self.settlements.push(settlement);
        self.touch();
    }

    pub fn user_names(&self) -> Vec<&str> {
        self.users.iter().map(|user| user.name.as_str()).collect()
    }

    /// Timestamp of the last committed mutation this session, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
