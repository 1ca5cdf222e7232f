//! Static permalinks keyed by route name.
//!
//! Routes without an owning entity (static pages) get their SEO mapping from
//! this table. It is filled once at configuration time and only read while
//! serving requests, so a shared reference can be used from any thread.

use permalink_core::SeoMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Route name to SEO mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticPermalinks {
    routes: HashMap<String, SeoMap>,
}

impl StaticPermalinks {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the SEO mapping for `route`, returning the previous one.
    pub fn insert(&mut self, route: impl Into<String>, seo: SeoMap) -> Option<SeoMap> {
        self.routes.insert(route.into(), seo)
    }

    /// The SEO mapping registered for `route`.
    pub fn get(&self, route: &str) -> Option<&SeoMap> {
        self.routes.get(route)
    }

    /// Check if `route` has a mapping.
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    /// Iterate over `(route, seo)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeoMap)> {
        self.routes.iter().map(|(route, seo)| (route.as_str(), seo))
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<HashMap<String, SeoMap>> for StaticPermalinks {
    fn from(routes: HashMap<String, SeoMap>) -> Self {
        Self { routes }
    }
}

impl<K: Into<String>> FromIterator<(K, SeoMap)> for StaticPermalinks {
    fn from_iter<I: IntoIterator<Item = (K, SeoMap)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, SeoMap)> for StaticPermalinks {
    fn extend<I: IntoIterator<Item = (K, SeoMap)>>(&mut self, iter: I) {
        self.routes
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
