//! The expense store.
//!
//! Owns the expense list and writes the whole list back to storage after
//! every change.

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStorage, Serializer};
use spendlog_core::SpendlogResult;
use spendlog_domain::{Expense, ExpenseId, NewExpense};

/// Storage key holding the serialized expense list.
pub const STORAGE_KEY: &str = "personal-expenses";

pub struct ExpenseStore<S: KeyValueStorage> {
    storage: S,
    expenses: Vec<Expense>,
}

impl<S: KeyValueStorage> ExpenseStore<S> {
    /// Open a store over `storage` and load whatever it already holds.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            expenses: Vec::new(),
        };
        store.load();
        store
    }

    /// Reload the list from storage, newest first.
    ///
    /// Missing or unreadable data yields an empty list.
    pub fn load(&mut self) -> &[Expense] {
        self.expenses = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match JsonSerializer.deserialize(raw.as_bytes()) {
                Ok(expenses) => expenses,
                Err(e) => {
                    tracing::warn!("Ignoring malformed expense data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read expense data: {}", e);
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} expenses", self.expenses.len());
        &self.expenses
    }

    /// Record a new expense at the front of the list and persist.
    ///
    /// Invalid input is rejected before anything changes. If the write fails
    /// the list is left as it was.
    pub fn add(&mut self, input: NewExpense) -> SpendlogResult<Expense> {
        let input = input.validate()?;

        let mut id = ExpenseId::generate();
        while self.get(&id).is_some() {
            id = ExpenseId::generate();
        }
        let expense = input.into_expense(id);

        self.expenses.insert(0, expense.clone());
        if let Err(e) = self.persist() {
            self.expenses.remove(0);
            return Err(e);
        }

        tracing::info!(
            "Added expense {} ({} for {})",
            expense.id,
            expense.amount,
            expense.category
        );
        Ok(expense)
    }

    /// Remove every expense with `id`. Returns false when there was none.
    ///
    /// If the write fails the list is left as it was.
    pub fn delete(&mut self, id: &ExpenseId) -> SpendlogResult<bool> {
        if !self.expenses.iter().any(|e| e.id == *id) {
            tracing::debug!("No expense {} to delete", id);
            return Ok(false);
        }

        let previous = self.expenses.clone();
        self.expenses.retain(|e| e.id != *id);
        if let Err(e) = self.persist() {
            self.expenses = previous;
            return Err(e);
        }

        tracing::info!("Deleted expense {}", id);
        Ok(true)
    }

    /// Write the full list to storage, replacing what was there.
    pub fn persist(&mut self) -> SpendlogResult<()> {
        let bytes = JsonSerializer.serialize(&self.expenses)?;
        let value = String::from_utf8_lossy(&bytes);
        self.storage.set(STORAGE_KEY, &value)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == *id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::traits::MockKeyValueStorage;
    use chrono::NaiveDate;
    use spendlog_core::SpendlogError;
    use spendlog_domain::summary;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store_with(inputs: &[(f64, &str)]) -> ExpenseStore<MemoryStorage> {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        for (amount, category) in inputs {
            store
                .add(NewExpense::new(*amount, *category, date("2024-03-01")))
                .unwrap();
        }
        store
    }

    fn reopen(store: ExpenseStore<MemoryStorage>) -> ExpenseStore<MemoryStorage> {
        ExpenseStore::open(store.into_storage())
    }

    #[test]
    fn test_open_empty_storage() {
        let store = ExpenseStore::open(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_load_scenario() {
        let mut store = ExpenseStore::open(MemoryStorage::new());
        let added = store
            .add(NewExpense::new(50.5, "Groceries", date("2024-03-01")))
            .unwrap();
        assert!(!added.id.as_str().is_empty());

        let store = reopen(store);
        assert_eq!(store.len(), 1);
        let loaded = &store.expenses()[0];
        assert_eq!(loaded, &added);
        assert_eq!(loaded.amount, 50.5);
        assert_eq!(loaded.category, "Groceries");
        assert_eq!(loaded.date, date("2024-03-01"));
        assert_eq!(summary::total(store.expenses()), 50.5);
    }

    #[test]
    fn test_add_prepends_and_keeps_prior_records() {
        let mut store = store_with(&[(1.0, "Other"), (2.0, "Travel")]);
        let prior = store.expenses().to_vec();

        let added = store
            .add(NewExpense::new(3.0, "Shopping", date("2024-03-02")))
            .unwrap();

        let mut store = reopen(store);
        let loaded = store.load().to_vec();
        assert_eq!(loaded[0], added);
        assert_eq!(&loaded[1..], prior.as_slice());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = store_with(&[(1.0, "A"), (2.0, "B"), (3.0, "C"), (4.0, "D")]);
        let mut ids: Vec<_> = store.expenses().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_invalid_add_stores_nothing() {
        let mut store = store_with(&[(1.0, "Other")]);

        let err = store
            .add(NewExpense::new(0.0, "Travel", date("2024-03-01")))
            .unwrap_err();
        assert!(matches!(err, SpendlogError::Validation(_)));

        let err = store
            .add(NewExpense::new(5.0, "", date("2024-03-01")))
            .unwrap_err();
        assert!(matches!(err, SpendlogError::Validation(_)));

        assert_eq!(reopen(store).len(), 1);
    }

    #[test]
    fn test_delete_removes_and_is_idempotent() {
        let mut store = store_with(&[(1.0, "Other"), (2.0, "Travel")]);
        let id = store.expenses()[1].id.clone();

        assert!(store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());

        let store = reopen(store);
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&[(1.0, "Other"), (2.0, "Travel"), (3.0, "Shopping")]);
        let before = store.expenses().to_vec();

        assert!(!store.delete(&ExpenseId::new("xyz")).unwrap());
        assert_eq!(store.expenses(), before.as_slice());
        assert_eq!(reopen(store).expenses(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_all_records_sharing_an_id() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                STORAGE_KEY,
                r#"[{"id":"dup","amount":1,"category":"Other","date":"2024-03-01"},
                    {"id":"keep","amount":2,"category":"Other","date":"2024-03-01"},
                    {"id":"dup","amount":3,"category":"Travel","date":"2024-03-02"}]"#,
            )
            .unwrap();
        let mut store = ExpenseStore::open(storage);
        assert_eq!(store.len(), 3);

        assert!(store.delete(&ExpenseId::new("dup")).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get(&ExpenseId::new("dup")).is_none());

        let store = reopen(store);
        assert_eq!(store.len(), 1);
        assert_eq!(store.expenses()[0].id.as_str(), "keep");
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "[{\"id\": 1, \"amount\": ").unwrap();

        let store = ExpenseStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_loads_legacy_records() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                STORAGE_KEY,
                r#"[{"id":"1709251200000","amount":20,"category":"Food & Dining","date":"2024-03-01","description":"Thali"},
                    {"id":"1709164800000","amount":80,"category":"Travel","date":"2024-02-29"}]"#,
            )
            .unwrap();

        let store = ExpenseStore::open(storage);
        assert_eq!(store.len(), 2);
        assert_eq!(store.expenses()[0].id.as_str(), "1709251200000");
        assert_eq!(store.expenses()[0].description.as_deref(), Some("Thali"));
        assert_eq!(store.expenses()[1].description, None);
    }

    #[test]
    fn test_quota_failure_rolls_back_add() {
        let mut store = ExpenseStore::open(MemoryStorage::with_quota(200));
        store
            .add(NewExpense::new(1.0, "Other", date("2024-03-01")))
            .unwrap();

        let err = store
            .add(
                NewExpense::new(2.0, "Other", date("2024-03-01"))
                    .with_description("x".repeat(300)),
            )
            .unwrap_err();
        assert!(matches!(err, SpendlogError::QuotaExceeded { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(reopen(store).len(), 1);
    }

    #[test]
    fn test_every_mutation_writes_once() {
        let mut storage = MockKeyValueStorage::new();
        storage.expect_get().times(1).returning(|_| Ok(None));
        storage
            .expect_set()
            .withf(|key, _| key.to_string() == STORAGE_KEY)
            .times(2)
            .returning(|_, _| Ok(()));

        let mut store = ExpenseStore::open(storage);
        let added = store
            .add(NewExpense::new(4.0, "Travel", date("2024-03-01")))
            .unwrap();
        assert!(store.delete(&added.id).unwrap());
        assert!(!store.delete(&added.id).unwrap());
    }

    #[test]
    fn test_failed_delete_write_restores_record() {
        let mut storage = MockKeyValueStorage::new();
        storage.expect_get().returning(|_| {
            Ok(Some(
                r#"[{"id":"a","amount":1,"category":"Other","date":"2024-03-01"},
                    {"id":"b","amount":2,"category":"Other","date":"2024-03-01"}]"#
                    .to_string(),
            ))
        });
        storage.expect_set().returning(|_, _| {
            Err(SpendlogError::Storage("disk full".to_string()))
        });

        let mut store = ExpenseStore::open(storage);
        let before = store.expenses().to_vec();
        assert!(store.delete(&ExpenseId::new("a")).is_err());
        assert_eq!(store.expenses(), before.as_slice());
    }

    #[test]
    fn test_unreadable_storage_loads_empty() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(SpendlogError::Storage("locked".to_string())));

        let store = ExpenseStore::open(storage);
        assert!(store.is_empty());
    }
}
