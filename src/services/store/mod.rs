// Record store service
// Ordered, index-addressed collection of validated records per dataset

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record index {index} is out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// In-memory system of record for one dataset.
///
/// A record's stable identity is its position; the store never reorders.
/// Which index is currently selected on screen is the UI's business, so
/// every mutating operation takes the index explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn append(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn replace(&mut self, index: usize, record: T) -> Result<(), StoreError> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Wholesale swap used by CSV import; the previous contents are
    /// discarded only once the full replacement is in hand.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }
}
