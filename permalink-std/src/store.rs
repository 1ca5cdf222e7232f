//! In-memory permalink storage keyed by owner.
//!
//! Keying on [`OwnerRef`] keeps at most one record per owning entity.

use permalink_core::{OwnerRef, PermalinkRecord, SeoMap};
use std::collections::HashMap;

/// Permalink records, one per owner.
#[derive(Debug, Clone, Default)]
pub struct PermalinkStore {
    records: HashMap<OwnerRef, PermalinkRecord>,
}

impl PermalinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record of `record.owner`, returning the old one.
    pub fn upsert(&mut self, record: PermalinkRecord) -> Option<PermalinkRecord> {
        self.records.insert(record.owner.clone(), record)
    }

    /// Set the SEO mapping of `owner`, creating its record if needed.
    pub fn upsert_seo(&mut self, owner: OwnerRef, seo: SeoMap) -> &PermalinkRecord {
        let record = self
            .records
            .entry(owner)
            .or_insert_with_key(|owner| PermalinkRecord::new(owner.clone()));
        record.seo = seo;
        record
    }

    /// The record owned by `owner`.
    pub fn get(&self, owner: &OwnerRef) -> Option<&PermalinkRecord> {
        self.records.get(owner)
    }

    /// Remove and return the record owned by `owner`.
    pub fn remove(&mut self, owner: &OwnerRef) -> Option<PermalinkRecord> {
        self.records.remove(owner)
    }

    /// Iterate over stored records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &PermalinkRecord> {
        self.records.values()
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
