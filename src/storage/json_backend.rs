use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::{app_data_dir, ensure_dir};
use crate::ledger::Collection;

use super::{CollectionRecords, Result, Snapshot, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// File-per-collection JSON storage. Each collection lives in its own array
/// file named after the durable store (`users.json`, `expenses.json`,
/// `personalExpenses.json`, `settlements.json`); a save replaces the whole
/// file atomically via a temp-file rename.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.store_name()))
    }

    fn write_records<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.collection_path(collection), &json)
    }

    fn read_records<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn read_or_empty<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        match self.read_records(collection) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    collection = collection.store_name(),
                    %err,
                    "failed to load collection, starting empty"
                );
                Vec::new()
            }
        }
    }
}

impl StorageBackend for JsonStorage {
    fn save_collection(&self, records: &CollectionRecords) -> Result<()> {
        match records {
            CollectionRecords::Users(users) => self.write_records(Collection::Users, users),
            CollectionRecords::GroupExpenses(expenses) => {
                self.write_records(Collection::GroupExpenses, expenses)
            }
            CollectionRecords::PersonalExpenses(expenses) => {
                self.write_records(Collection::PersonalExpenses, expenses)
            }
            CollectionRecords::Settlements(settlements) => {
                self.write_records(Collection::Settlements, settlements)
            }
        }
    }

    fn load_all(&self) -> Snapshot {
        Snapshot {
            users: self.read_or_empty(Collection::Users),
            expenses: self.read_or_empty(Collection::GroupExpenses),
            personal_expenses: self.read_or_empty(Collection::PersonalExpenses),
            settlements: self.read_or_empty(Collection::Settlements),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{GroupExpense, User};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order() {
        let (storage, _guard) = storage_with_temp_dir();
        let expenses = vec![
            GroupExpense::new("Dinner", 100.0, vec!["A".into(), "B".into()]),
            GroupExpense::new("Taxi", 30.0, vec!["B".into()]),
        ];
        storage
            .save_collection(&CollectionRecords::GroupExpenses(expenses.clone()))
            .expect("save expenses");

        let snapshot = storage.load_all();
        assert_eq!(snapshot.expenses, expenses);
        assert!(snapshot.users.is_empty());
    }

    #[test]
    fn missing_files_load_as_empty_collections() {
        let (storage, _guard) = storage_with_temp_dir();
        let snapshot = storage.load_all();
        assert!(snapshot.users.is_empty());
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.personal_expenses.is_empty());
        assert!(snapshot.settlements.is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_without_error() {
        let (storage, guard) = storage_with_temp_dir();
        std::fs::write(guard.path().join("users.json"), "not json").unwrap();
        let snapshot = storage.load_all();
        assert!(snapshot.users.is_empty());
    }

    #[test]
    fn save_replaces_the_entire_collection() {
        let (storage, _guard) = storage_with_temp_dir();
        let first = vec![User::new("Ana"), User::new("Ben")];
        storage
            .save_collection(&CollectionRecords::Users(first))
            .unwrap();
        let second = vec![User::new("Cleo")];
        storage
            .save_collection(&CollectionRecords::Users(second.clone()))
            .unwrap();

        let snapshot = storage.load_all();
        assert_eq!(snapshot.users, second);
    }

    #[test]
    fn camel_case_wire_schema() {
        let (storage, guard) = storage_with_temp_dir();
        let expenses = vec![GroupExpense::new("Dinner", 100.0, vec!["A".into()])];
        storage
            .save_collection(&CollectionRecords::GroupExpenses(expenses))
            .unwrap();
        let raw = std::fs::read_to_string(guard.path().join("expenses.json")).unwrap();
        assert!(raw.contains("\"splitBetween\""));
    }
}
