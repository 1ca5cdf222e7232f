//! Standard builders writing into a [`SeoDocument`].
//!
//! | Section     | Builder                | Writes                              |
//! |-------------|------------------------|-------------------------------------|
//! | `base`      | [`BaseBuilder`]        | title, description, keywords, ...   |
//! | `meta`      | [`MetaTagsBuilder`]    | page fields and `<meta name>` tags  |
//! | `opengraph` | [`OpenGraphBuilder`]   | `og:*` properties                   |
//! | `twitter`   | [`TwitterCardBuilder`] | `twitter:*` properties              |

mod base;
mod meta;
mod opengraph;
mod twitter;

pub use base::BaseBuilder;
pub use meta::MetaTagsBuilder;
pub use opengraph::OpenGraphBuilder;
pub use twitter::TwitterCardBuilder;

use crate::{document::SeoDocument, registry::BuilderRegistry};
use permalink_core::{Section, SeoMap, Value, value_kind};
use thiserror::Error;

/// A registry with every standard builder.
pub fn standard_registry() -> BuilderRegistry<SeoDocument> {
    BuilderRegistry::builder()
        .register(Section::Base, BaseBuilder)
        .register(Section::Meta, MetaTagsBuilder)
        .register(Section::OpenGraph, OpenGraphBuilder)
        .register(Section::Twitter, TwitterCardBuilder)
        .build()
}

/// A section field holds a value the builder cannot render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{key}` must be a string, number or boolean, found {found}")]
pub struct FieldError {
    /// Offending key.
    pub key: String,
    /// JSON type name of the offending value.
    pub found: &'static str,
}

/// Fields of a section that carry a value. Null fields render nothing.
fn fields(data: &SeoMap) -> impl Iterator<Item = (&String, &Value)> {
    data.iter().filter(|(_, value)| !value.is_null())
}

/// Render a scalar as tag content.
fn text(key: &str, value: &Value) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(FieldError {
            key: key.to_string(),
            found: value_kind(other),
        }),
    }
}

/// Render a scalar or an array of scalars.
fn texts(key: &str, value: &Value) -> Result<Vec<String>, FieldError> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| text(key, item))
            .collect(),
        other => text(key, other).map(|t| vec![t]),
    }
}

/// Apply a page-level field shared by the base and meta sections.
///
/// Returns `false` when `key` is not a page-level field.
fn apply_page_field(doc: &mut SeoDocument, key: &str, value: &Value) -> Result<bool, FieldError> {
    match key {
        "title" => doc.set_title(text(key, value)?),
        "description" => doc.set_description(text(key, value)?),
        "keywords" => match value {
            Value::String(list) => doc.set_keywords(
                list.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty()),
            ),
            other => doc.set_keywords(texts(key, other)?),
        },
        "canonical" => doc.set_canonical(text(key, value)?),
        "robots" => doc.set_robots(text(key, value)?),
        _ => return Ok(false),
    }
    Ok(true)
}
