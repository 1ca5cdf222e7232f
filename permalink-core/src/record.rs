//! Permalink records and their polymorphic owners.

use crate::seo::{SeoMap, Sections};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to the entity owning a permalink.
///
/// Any entity kind may own a record, so the owner is identified by its kind
/// (e.g. `"page"`, `"post"`) plus its id within that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Entity kind.
    pub kind: String,
    /// Entity id within its kind.
    pub id: String,
}

impl OwnerRef {
    /// Create a new owner reference.
    pub fn new(kind: impl Into<String>, id: impl ToString) -> Self {
        Self {
            kind: kind.into(),
            id: id.to_string(),
        }
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// SEO configuration attached to exactly one owning entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermalinkRecord {
    /// The entity this record belongs to.
    pub owner: OwnerRef,
    /// Section name to nested configuration.
    #[serde(default)]
    pub seo: SeoMap,
}

impl PermalinkRecord {
    /// Create a record with an empty SEO mapping.
    pub fn new(owner: OwnerRef) -> Self {
        Self {
            owner,
            seo: SeoMap::new(),
        }
    }

    /// Replace the SEO mapping.
    pub fn with_seo(mut self, seo: SeoMap) -> Self {
        self.seo = seo;
        self
    }

    /// The SEO mapping split into builder sections.
    pub fn sections(&self) -> Sections {
        Sections::partition(&self.seo)
    }
}
