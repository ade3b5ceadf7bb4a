//! In-memory record store.
//!
//! Holds the fetched collection for the lifetime of the plugin. Nothing is
//! written anywhere: adds, edits and deletes are gone once the pane closes.

use crate::domain::error::{CommentaryError, Result};
use crate::domain::Record;

/// Owned collection of records in source order.
///
/// New records are prepended so a freshly added comment shows up on the first
/// page while no sort is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a store holding `records`.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Replaces the whole collection, as after the startup fetch.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        tracing::debug!(
            previous = self.records.len(),
            incoming = records.len(),
            "replacing record collection"
        );
        self.records = records;
    }

    /// Adds a record in front of the collection.
    pub fn insert(&mut self, record: Record) {
        let _span = tracing::debug_span!("store_insert", record_id = record.id).entered();
        self.records.insert(0, record);
        tracing::debug!(count = self.records.len(), "record inserted");
    }

    /// Replaces the record sharing `record.id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::NotFound`] if no record has that id.
    pub fn update(&mut self, record: Record) -> Result<()> {
        let _span = tracing::debug_span!("store_update", record_id = record.id).entered();

        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(CommentaryError::NotFound(record.id))?;
        *slot = record;

        tracing::debug!("record updated");
        Ok(())
    }

    /// Removes and returns the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::NotFound`] if no record has that id.
    pub fn remove(&mut self, id: i64) -> Result<Record> {
        let _span = tracing::debug_span!("store_remove", record_id = id).entered();

        let idx = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(CommentaryError::NotFound(id))?;
        let removed = self.records.remove(idx);

        tracing::debug!(count = self.records.len(), "record removed");
        Ok(removed)
    }

    /// Looks a record up by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in source order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
