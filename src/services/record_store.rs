use crate::error::StoreError;
use crate::models::{RecordId, SalesRecord, SalesRecordData};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type SharedRecordStore = Arc<Mutex<RecordStore>>;

/// In-memory, insertion-ordered collection of sales records.
///
/// Ids are handed out from a counter that only moves forward, so an id is
/// never reused even after its record is deleted.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<SalesRecord>,
    next_id: RecordId,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn into_shared(self) -> SharedRecordStore {
        Arc::new(Mutex::new(self))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next created record will receive.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn get_all(&self) -> Vec<SalesRecord> {
        self.records.clone()
    }

    pub fn get(&self, id: RecordId) -> Option<SalesRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    /// Fails without touching the store once the id counter cannot advance.
    pub fn create(&mut self, data: SalesRecordData) -> Result<SalesRecord, StoreError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;

        let record = SalesRecord::new(id, data);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Returns the updated record, or `None` if no record has that id.
    pub fn update(&mut self, id: RecordId, data: SalesRecordData) -> Option<SalesRecord> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.apply(data);
        Some(record.clone())
    }

    /// Returns the removed record, or `None` if no record has that id.
    pub fn delete(&mut self, id: RecordId) -> Option<SalesRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
impl RecordStore {
    pub(crate) fn with_next_id(next_id: RecordId) -> Self {
        RecordStore {
            records: Vec::new(),
            next_id,
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        RecordStore::new()
    }
}

/// Locks a shared store.
///
/// Every store operation completes before releasing the lock, so a poisoned
/// guard still holds a consistent store and is used as-is.
pub fn lock_store(store: &SharedRecordStore) -> MutexGuard<'_, RecordStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
