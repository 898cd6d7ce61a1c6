//! The change-record table for one diff.
//!
//! A `RecordStore` is built once (usually by `loader::load_changes`) and
//! never mutated afterwards; filtering and aggregation borrow from it.

pub mod loader;

use crate::record::ChangeRecord;

pub use loader::{load_changes, load_details};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<ChangeRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<ChangeRecord>) -> Self {
        RecordStore { records }
    }

    /// All records in table order.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ChangeRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = ChangeRecord>>(iter: I) -> Self {
        RecordStore::from_records(iter.into_iter().collect())
    }
}
