//! The record store trait.

use chrono::NaiveDateTime;

use crate::{CriminalRecord, RecordSummary, SearchQuery, StoreError};

/// Typed interface to the criminal-record store.
///
/// Calls are blocking and synchronous; callers must not overlap them. The
/// production implementation is `NativeStore`, which forwards every
/// operation to the external native library.
pub trait RecordStore {
    /// Create a record. The native store reports no failure for duplicates.
    fn create(&mut self, record: &CriminalRecord) -> Result<(), StoreError>;

    /// Remove the record matching a name and time. Removing an absent record
    /// is not an error.
    fn delete(&mut self, name: &str, time: NaiveDateTime) -> Result<(), StoreError>;

    /// Run a search and return the matching rows, in store order.
    ///
    /// An empty result means no matches; it is not an error.
    fn search(&self, query: &SearchQuery) -> Result<Vec<RecordSummary>, StoreError>;
}
