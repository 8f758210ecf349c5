use billbuddy::core::LedgerManager;
use billbuddy::ledger::{GroupExpense, PersonalExpense, Settlement, User};
use billbuddy::storage::{CollectionRecords, JsonStorage, StorageBackend};
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> JsonStorage {
    JsonStorage::new(Some(dir.path().to_path_buf())).expect("json storage")
}

#[test]
fn all_four_collections_roundtrip_in_order() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let users = vec![User::new("Ana"), User::new("Ben"), User::new("Ana")];
    let expenses = vec![
        GroupExpense::new("Dinner", 100.0, vec!["Ana".into(), "Ben".into()]),
        GroupExpense::new("Taxi", 24.0, vec!["Ben".into()]),
    ];
    let personal = vec![PersonalExpense::new("Lunch", 12.0, "Food")];
    let settlements = vec![Settlement::new("Ana", 50.0)];

    storage
        .save_collection(&CollectionRecords::Users(users.clone()))
        .unwrap();
    storage
        .save_collection(&CollectionRecords::GroupExpenses(expenses.clone()))
        .unwrap();
    storage
        .save_collection(&CollectionRecords::PersonalExpenses(personal.clone()))
        .unwrap();
    storage
        .save_collection(&CollectionRecords::Settlements(settlements.clone()))
        .unwrap();

    let snapshot = storage.load_all();
    assert_eq!(snapshot.users, users);
    assert_eq!(snapshot.expenses, expenses);
    assert_eq!(snapshot.personal_expenses, personal);
    assert_eq!(snapshot.settlements, settlements);
}

#[test]
fn manager_state_survives_a_restart() {
    let temp = TempDir::new().unwrap();

    let mut manager = LedgerManager::open(Box::new(storage_in(&temp))).unwrap();
    manager.add_user("Ana").unwrap();
    manager.add_user("Ben").unwrap();
    manager
        .add_group_expense("Dinner", 100.0, vec!["Ana".into(), "Ben".into()])
        .unwrap();
    manager.add_personal_expense("Lunch", 12.0, "Food").unwrap();
    manager.add_settlement("Ana", 25.0).unwrap();
    manager.close();

    let reopened = LedgerManager::open(Box::new(storage_in(&temp))).unwrap();
    let ledger = reopened.ledger();
    assert_eq!(ledger.users.len(), 2);
    assert_eq!(ledger.expenses.len(), 1);
    assert_eq!(ledger.personal_expenses.len(), 1);
    assert_eq!(ledger.settlements.len(), 1);
    assert_eq!(reopened.balance_of("Ana"), 25.0);
    reopened.close();
}

#[test]
fn unreadable_store_starts_a_fresh_session() {
    let temp = TempDir::new().unwrap();
    for name in ["users", "expenses", "personalExpenses", "settlements"] {
        std::fs::write(temp.path().join(format!("{name}.json")), "{broken").unwrap();
    }

    let manager = LedgerManager::open(Box::new(storage_in(&temp))).unwrap();
    assert!(manager.ledger().users.is_empty());
    assert!(manager.ledger().expenses.is_empty());
    manager.close();
}

#[test]
fn close_drains_pending_writes_to_disk() {
    let temp = TempDir::new().unwrap();
    let mut manager = LedgerManager::open(Box::new(storage_in(&temp))).unwrap();
    for i in 0..50 {
        manager.add_user(&format!("user{i}")).unwrap();
    }
    manager.close();

    let snapshot = storage_in(&temp).load_all();
    assert_eq!(snapshot.users.len(), 50);
    assert_eq!(snapshot.users.last().unwrap().name, "user49");
}
