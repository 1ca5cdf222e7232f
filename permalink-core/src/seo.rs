//! SEO mappings and their partition into builder sections.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Nested key/value configuration describing page metadata.
///
/// Keys keep their document order.
pub type SeoMap = serde_json::Map<String, Value>;

/// A named slice of an SEO mapping, each handled by at most one builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Every key of the mapping that is not a reserved section.
    Base,
    /// `<meta name="...">` tags.
    Meta,
    /// Open Graph `og:*` properties.
    OpenGraph,
    /// Twitter card properties.
    Twitter,
}

impl Section {
    /// Sections with a reserved key of their own, in dispatch order.
    pub const RESERVED: [Section; 3] = [Section::Meta, Section::OpenGraph, Section::Twitter];

    /// Every section, in dispatch order.
    pub const ALL: [Section; 4] = [
        Section::Base,
        Section::Meta,
        Section::OpenGraph,
        Section::Twitter,
    ];

    /// The key this section is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Base => "base",
            Section::Meta => "meta",
            Section::OpenGraph => "opengraph",
            Section::Twitter => "twitter",
        }
    }

    /// Service identifier of the builder for this section (`permalink.<section>`).
    pub const fn binding(self) -> &'static str {
        match self {
            Section::Base => "permalink.base",
            Section::Meta => "permalink.meta",
            Section::OpenGraph => "permalink.opengraph",
            Section::Twitter => "permalink.twitter",
        }
    }

    /// Returns the reserved section stored under `key`.
    ///
    /// `base` is not a reserved key: a literal `base` entry belongs to the
    /// base section like any other unreserved key.
    pub fn reserved(key: &str) -> Option<Section> {
        Self::RESERVED.into_iter().find(|s| s.as_str() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SEO section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// JSON type name of `value`, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An SEO mapping partitioned into builder sections.
///
/// The order is `base` (only when the mapping has unreserved keys), then
/// `meta`, `opengraph` and `twitter`. Reserved sections missing from the
/// mapping are still listed, with no data.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    entries: Vec<(Section, Option<Value>)>,
}

impl Sections {
    /// Split `seo` into its sections.
    pub fn partition(seo: &SeoMap) -> Self {
        let base: SeoMap = seo
            .iter()
            .filter(|(key, _)| Section::reserved(key).is_none())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut entries = Vec::with_capacity(Section::ALL.len());
        if !base.is_empty() {
            entries.push((Section::Base, Some(Value::Object(base))));
        }
        for section in Section::RESERVED {
            entries.push((section, seo.get(section.as_str()).cloned()));
        }

        Self { entries }
    }

    /// Iterate over `(section, data)` pairs in dispatch order.
    ///
    /// Null data is reported as `None`.
    pub fn iter(&self) -> impl Iterator<Item = (Section, Option<&Value>)> + '_ {
        self.entries
            .iter()
            .map(|(section, data)| (*section, data.as_ref().filter(|v| !v.is_null())))
    }

    /// Data for `section`, if present and not null.
    pub fn get(&self, section: Section) -> Option<&Value> {
        self.iter()
            .find(|(s, _)| *s == section)
            .and_then(|(_, data)| data)
    }

    /// The implicit base section, if the mapping had unreserved keys.
    pub fn base(&self) -> Option<&SeoMap> {
        self.get(Section::Base).and_then(Value::as_object)
    }

    /// Get the number of sections listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no sections are listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&SeoMap> for Sections {
    fn from(seo: &SeoMap) -> Self {
        Self::partition(seo)
    }
}
