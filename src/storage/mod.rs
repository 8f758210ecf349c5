pub mod json_backend;
pub mod worker;

use crate::errors::LedgerError;
use crate::ledger::{Collection, GroupExpense, Ledger, PersonalExpense, Settlement, User};

pub type Result<T> = std::result::Result<T, LedgerError>;

pub use json_backend::JsonStorage;
pub use worker::PersistenceWorker;

/// The full contents of one collection, ready to replace its durable mirror.
/// Persistence is clear-and-rewrite: a save carries every record, never a
/// diff.
#[derive(Debug, Clone)]
pub enum CollectionRecords {
    Users(Vec<User>),
    GroupExpenses(Vec<GroupExpense>),
    PersonalExpenses(Vec<PersonalExpense>),
    Settlements(Vec<Settlement>),
}

impl CollectionRecords {
    pub fn collection(&self) -> Collection {
        match self {
            CollectionRecords::Users(_) => Collection::Users,
            CollectionRecords::GroupExpenses(_) => Collection::GroupExpenses,
            CollectionRecords::PersonalExpenses(_) => Collection::PersonalExpenses,
            CollectionRecords::Settlements(_) => Collection::Settlements,
        }
    }

    /// Clones the named collection out of the ledger.
    pub fn from_ledger(ledger: &Ledger, collection: Collection) -> Self {
        match collection {
            Collection::Users => CollectionRecords::Users(ledger.users.clone()),
            Collection::GroupExpenses => {
                CollectionRecords::GroupExpenses(ledger.expenses.clone())
            }
            Collection::PersonalExpenses => {
                CollectionRecords::PersonalExpenses(ledger.personal_expenses.clone())
            }
            Collection::Settlements => {
                CollectionRecords::Settlements(ledger.settlements.clone())
            }
        }
    }
}

/// All four collections as read from durable storage.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub expenses: Vec<GroupExpense>,
    pub personal_expenses: Vec<PersonalExpense>,
    pub settlements: Vec<Settlement>,
}

impl Snapshot {
    pub fn into_ledger(self) -> Ledger {
        Ledger::from_collections(
            self.users,
            self.expenses,
            self.personal_expenses,
            self.settlements,
        )
    }
}

/// Abstraction over persistence backends that mirror the ledger collections.
pub trait StorageBackend: Send + Sync {
    /// Replaces the stored collection with the given records.
    fn save_collection(&self, records: &CollectionRecords) -> Result<()>;

    /// Reads all four collections. Never fails: a collection that cannot be
    /// read comes back empty and the failure is logged.
    fn load_all(&self) -> Snapshot;
}
