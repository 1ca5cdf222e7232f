#![allow(dead_code)]

use permalink::{
    BoxError, HasPermalink, OwnerRef, PermalinkError, PermalinkRecord, PermalinkStore,
    Permalinkable, SeoMap, Value, after_save,
};
use std::collections::HashMap;

// ============================================================================
// Helpers
// ============================================================================

pub fn seo(value: Value) -> SeoMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

pub fn record(kind: &str, id: u64, value: Value) -> PermalinkRecord {
    PermalinkRecord::new(OwnerRef::new(kind, id)).with_seo(seo(value))
}

// ============================================================================
// Test Database
// ============================================================================

/// Page rows plus the permalink records owned by them.
#[derive(Default)]
pub struct Database {
    pub pages: HashMap<u64, String>,
    pub permalinks: PermalinkStore,
}

// ============================================================================
// Test Entities
// ============================================================================

/// A page whose permalink is refreshed from its title on save.
pub struct Page {
    pub id: u64,
    pub title: String,
    pub refresh_on_save: Option<bool>,
    pub reject_update: bool,
    pub updates: usize,
    pub permalink: Option<PermalinkRecord>,
}

impl Page {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            refresh_on_save: Some(true),
            reject_update: false,
            updates: 0,
            permalink: None,
        }
    }

    pub fn owner(&self) -> OwnerRef {
        OwnerRef::new("page", self.id)
    }

    /// Write the page row, then run the save hook.
    ///
    /// A failed permalink update is reported to the caller but never rolls
    /// back the row.
    pub fn save(&mut self, db: &mut Database) -> Result<(), PermalinkError> {
        db.pages.insert(self.id, self.title.clone());
        let outcome = after_save(self);
        if let Some(record) = &self.permalink {
            db.permalinks.upsert(record.clone());
        }
        outcome.map(|_| ())
    }
}

impl HasPermalink for Page {
    fn permalink(&self) -> Option<&PermalinkRecord> {
        self.permalink.as_ref()
    }
}

impl Permalinkable for Page {
    fn update_permalink_on_save(&self) -> Option<bool> {
        self.refresh_on_save
    }

    fn update_permalink(&mut self) -> Result<(), BoxError> {
        if self.reject_update {
            return Err(format!("page {} has no slug", self.id).into());
        }
        self.updates += 1;
        let seo = seo(serde_json::json!({
            "title": self.title,
            "opengraph": { "title": self.title }
        }));
        self.permalink = Some(PermalinkRecord::new(self.owner()).with_seo(seo));
        Ok(())
    }
}

/// An entity that never takes part in permalink refreshes.
pub struct Tag {
    pub permalink: Option<PermalinkRecord>,
}

impl HasPermalink for Tag {
    fn permalink(&self) -> Option<&PermalinkRecord> {
        self.permalink.as_ref()
    }
}

impl Permalinkable for Tag {
    fn update_permalink(&mut self) -> Result<(), BoxError> {
        unreachable!("tags never request a permalink update")
    }
}
