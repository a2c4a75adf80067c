use thiserror::Error;

use crate::domain::{Record, RecordUpdate};
use crate::storage::{Storage, StorageError};

/// Storage key holding the JSON array of all records.
pub const RECORDS_KEY: &str = "jobboard_records";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to persist records: {0}")]
    Persist(#[from] StorageError),
}

/// Answer from the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// The single owned record collection, newest first.
///
/// Every mutation rewrites the full snapshot under [`RECORDS_KEY`]. On a
/// persistence error the in-memory change is kept and the error is returned.
pub struct RecordStore<S> {
    storage: S,
    records: Vec<Record>,
}

impl<S: Storage> RecordStore<S> {
    /// Reads the persisted snapshot. A missing, unreadable or corrupt blob
    /// yields an empty store.
    pub fn load(storage: S) -> Self {
        let records = match storage.get(RECORDS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Record>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "stored records are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored records, starting empty");
                Vec::new()
            }
        };
        tracing::info!(count = records.len(), "record store loaded");
        Self { storage, records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn add(&mut self, record: Record) -> Result<(), StoreError> {
        tracing::debug!(id = %record.id, category = %record.category, "adding record");
        self.records.insert(0, record);
        self.persist()
    }

    /// Prepends the batch, keeping its internal order, in one mutation.
    pub fn bulk_add(&mut self, batch: Vec<Record>) -> Result<usize, StoreError> {
        let count = batch.len();
        self.records.splice(0..0, batch);
        tracing::info!(count, "bulk added records");
        self.persist()?;
        Ok(count)
    }

    /// Merges `update` into the record with `id`. Returns whether a record matched.
    pub fn update(&mut self, id: &str, update: RecordUpdate) -> Result<bool, StoreError> {
        let found = match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                update.apply_to(record);
                true
            }
            None => {
                tracing::debug!(id, "update for unknown record ignored");
                false
            }
        };
        self.persist()?;
        Ok(found)
    }

    /// Removes the record with `id` once confirmed. Returns whether a record was removed.
    pub fn remove(&mut self, id: &str, confirmation: Confirmation) -> Result<bool, StoreError> {
        if confirmation == Confirmation::Declined {
            tracing::debug!(id, "delete declined");
            return Ok(false);
        }
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            tracing::info!(id, "record deleted");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Records under one menu entry matching the search term, in store order.
    pub fn filtered<'a>(
        &'a self,
        category: &'a str,
        sub_category: &'a str,
        term: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| {
            r.category == category && r.sub_category == sub_category && r.matches_search(term)
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.records)?;
        self.storage.set(RECORDS_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::record;
    use crate::domain::Status;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    // Shares one MemoryStorage between a store and the assertions.
    impl Storage for Rc<MemoryStorage> {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            (**self).get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            (**self).set(key, value)
        }
    }

    fn persisted(storage: &Rc<MemoryStorage>) -> Vec<Record> {
        let raw = storage.get(RECORDS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn load_falls_back_to_empty() {
        let storage = MemoryStorage::new();
        assert!(RecordStore::load(storage).is_empty());

        let storage = MemoryStorage::new();
        storage.set(RECORDS_KEY, "{not json").unwrap();
        assert!(RecordStore::load(storage).is_empty());
    }

    #[test]
    fn snapshot_tracks_every_mutation() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = RecordStore::load(storage.clone());

        store.add(record("a", "Problem", Status::Pending, "2024-01-10")).unwrap();
        assert_eq!(persisted(&storage), store.records());

        store.add(record("b", "Problem", Status::Pending, "2024-01-10")).unwrap();
        assert_eq!(store.records()[0].id, "b", "newest first");
        assert_eq!(persisted(&storage), store.records());

        store.update("a", RecordUpdate::status(Status::Completed)).unwrap();
        assert_eq!(persisted(&storage), store.records());

        store.remove("b", Confirmation::Confirmed).unwrap();
        assert_eq!(persisted(&storage), store.records());

        store
            .bulk_add(vec![
                record("c", "Problem", Status::Pending, "2024-01-10"),
                record("d", "Request Data", Status::InProgress, "2024-01-12"),
            ])
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(persisted(&storage), store.records());

        let reloaded = RecordStore::load(storage.clone());
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn bulk_add_prepends_batch_in_order() {
        let mut store = RecordStore::load(MemoryStorage::new());
        store.add(record("old", "Problem", Status::Pending, "2024-01-10")).unwrap();

        let count = store
            .bulk_add(vec![
                record("x", "Problem", Status::Pending, "2024-01-10"),
                record("y", "Problem", Status::Pending, "2024-01-10"),
            ])
            .unwrap();

        assert_eq!(count, 2);
        let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "old"]);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = RecordStore::load(MemoryStorage::new());
        store.add(record("a", "Problem", Status::Pending, "2024-01-10")).unwrap();
        let before = store.records().to_vec();

        assert!(!store.update("missing", RecordUpdate::status(Status::Completed)).unwrap());
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn declined_delete_leaves_collection_unchanged() {
        let mut store = RecordStore::load(MemoryStorage::new());
        store.add(record("a", "Problem", Status::Pending, "2024-01-10")).unwrap();
        store.add(record("b", "Problem", Status::Pending, "2024-01-10")).unwrap();

        assert!(!store.remove("a", Confirmation::Declined).unwrap());
        assert_eq!(store.len(), 2);

        assert!(store.remove("a", Confirmation::Confirmed).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get("a").is_none());
        assert!(store.get("b").is_some());
    }

    #[test]
    fn filtered_scopes_to_menu_entry_and_search() {
        let mut store = RecordStore::load(MemoryStorage::new());
        let mut other_sub = record("1", "Problem", Status::Pending, "2024-01-10");
        other_sub.sub_category = "SLA".to_string();
        let mut bandung = record("2", "Problem", Status::Pending, "2024-01-10");
        bandung.branch_dept = "Bandung".to_string();
        store
            .bulk_add(vec![
                other_sub,
                bandung,
                record("3", "Problem", Status::Pending, "2024-01-10"),
                record("4", "Request Data", Status::Pending, "2024-01-10"),
            ])
            .unwrap();

        let ids: Vec<_> = store.filtered("Problem", "Nasional", "").map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
        let ids: Vec<_> = store.filtered("Problem", "Nasional", "band").map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }
}
