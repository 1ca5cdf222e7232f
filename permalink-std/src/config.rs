//! Static permalink configuration.
//!
//! ```json
//! {
//!   "permalinks": {
//!     "home": { "title": "Home", "meta": { "description": "Welcome" } },
//!     "static-about": { "opengraph": { "type": "website" } }
//!   }
//! }
//! ```

use crate::table::StaticPermalinks;
use permalink_core::{ConfigError, SeoMap, value_kind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermalinkConfig {
    /// SEO mappings for routes without an owning entity.
    #[serde(default)]
    pub permalinks: StaticPermalinks,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    permalinks: serde_json::Map<String, Value>,
}

impl PermalinkConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Build the configuration from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut permalinks = StaticPermalinks::new();
        for (route, seo) in raw.permalinks {
            let seo = as_seo(&route, seo)?;
            permalinks.insert(route, seo);
        }
        Ok(Self { permalinks })
    }
}

fn as_seo(route: &str, value: Value) -> Result<SeoMap, ConfigError> {
    match value {
        Value::Object(seo) => Ok(seo),
        other => Err(ConfigError::InvalidSeo {
            route: route.to_string(),
            found: value_kind(&other),
        }),
    }
}
