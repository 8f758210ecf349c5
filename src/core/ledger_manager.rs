use uuid::Uuid;

use crate::core::notify::NotificationSink;
use crate::core::services::{
    GroupExpenseService, PersonalExpenseService, SettlementService, UserService,
};
use crate::ledger::{reports, Collection, Ledger};
use crate::storage::{CollectionRecords, PersistenceWorker, Result, StorageBackend};

/// Facade that owns the authoritative in-memory ledger and coordinates
/// validation, persistence, notifications, and change listeners.
///
/// Every committed mutation dispatches exactly one fire-and-forget save of
/// the changed collection; rejected mutations touch nothing. Presentation
/// code reads through [`ledger`](Self::ledger) and the query helpers and
/// mutates only through the `add_*` operations.
pub struct LedgerManager {
    ledger: Ledger,
    worker: PersistenceWorker,
    notifier: Option<Box<dyn NotificationSink>>,
    listeners: Vec<Box<dyn Fn(Collection)>>,
}

impl LedgerManager {
    /// Loads all collections from the backend and takes ownership of it for
    /// background writes. Storage that cannot be read starts empty.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = backend.load_all().into_ledger();
        let worker = PersistenceWorker::spawn(backend)?;
        Ok(Self {
            ledger,
            worker,
            notifier: None,
            listeners: Vec::new(),
        })
    }

    pub fn set_notifier(&mut self, notifier: Option<Box<dyn NotificationSink>>) {
        self.notifier = notifier;
    }

    /// Registers a listener invoked with the changed collection after each
    /// committed mutation.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(Collection)>) {
        self.listeners.push(listener);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_user(&mut self, name: &str) -> Option<String> {
        let added = UserService::add(&mut self.ledger, name)?;
        self.committed(Collection::Users);
        self.notify(
            "New User Added",
            &format!("{added} has been added to the group!"),
        );
        Some(added)
    }

    pub fn add_group_expense(
        &mut self,
        description: &str,
        amount: f64,
        split_between: Vec<String>,
    ) -> Option<Uuid> {
        let split_label = split_between.join(", ");
        let id = GroupExpenseService::add(&mut self.ledger, description, amount, split_between)?;
        self.committed(Collection::GroupExpenses);
        self.notify(
            "Expense Added",
            &format!("{}: ₹{amount} split between {split_label}", description.trim()),
        );
        Some(id)
    }

    pub fn add_personal_expense(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
    ) -> Option<Uuid> {
        let id = PersonalExpenseService::add(&mut self.ledger, description, amount, category)?;
        self.committed(Collection::PersonalExpenses);
        self.notify(
            "Personal Expense Added",
            &format!("{}: ₹{amount} in {}", description.trim(), category.trim()),
        );
        Some(id)
    }

    pub fn add_settlement(&mut self, user: &str, amount: f64) -> Option<Uuid> {
        let id = SettlementService::add(&mut self.ledger, user, amount)?;
        self.committed(Collection::Settlements);
        self.notify(
            "Settlement Recorded",
            &format!("₹{amount} settled by {}", user.trim()),
        );
        Some(id)
    }

    /// Signed amount `user` owes the group, rounded for display.
    pub fn balance_of(&self, user: &str) -> f64 {
        reports::balance_of(&self.ledger, user)
    }

    /// Shuts the persistence worker down after draining queued writes.
    pub fn close(self) {
        self.worker.shutdown();
    }

    fn committed(&mut self, collection: Collection) {
        self.worker
            .dispatch(CollectionRecords::from_ledger(&self.ledger, collection));
        for listener in &self.listeners {
            listener(collection);
        }
    }

    fn notify(&self, title: &str, body: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(title, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn manager_with_temp_dir() -> (LedgerManager, TempDir) {
        let temp = TempDir::new().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let manager = LedgerManager::open(Box::new(storage)).unwrap();
        (manager, temp)
    }

    #[test]
    fn committed_mutations_fire_listeners() {
        let (mut manager, _guard) = manager_with_temp_dir();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        manager.subscribe(Box::new(move |collection| {
            assert_eq!(collection, Collection::Users);
            counter.set(counter.get() + 1);
        }));

        manager.add_user("Ana");
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn rejected_mutations_fire_nothing() {
        let (mut manager, _guard) = manager_with_temp_dir();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        manager.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(manager.add_group_expense("", 10.0, vec!["A".into()]).is_none());
        assert!(manager.add_settlement("A", -1.0).is_none());
        assert_eq!(seen.get(), 0);
        assert!(manager.ledger().expenses.is_empty());
    }

    #[test]
    fn dinner_scenario_balances() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_user("A");
        manager.add_user("B");
        manager
            .add_group_expense("Dinner", 100.0, vec!["A".into(), "B".into()])
            .unwrap();
        assert_eq!(manager.balance_of("A"), 50.0);
        assert_eq!(manager.balance_of("B"), 50.0);

        manager.add_settlement("A", 50.0).unwrap();
        assert_eq!(manager.balance_of("A"), 0.0);
        assert_eq!(manager.balance_of("B"), 50.0);
    }
}
