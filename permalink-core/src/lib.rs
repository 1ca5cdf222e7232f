//! # permalink-core
//!
//! Core traits and types for route-bound SEO permalinks.
//!
//! This crate has minimal dependencies and is meant to be imported by hosts
//! and builder implementations that don't need the `permalink-std` pieces.
//!
//! # Pieces
//!
//! ## Records ([`PermalinkRecord`])
//!
//! SEO configuration owned by exactly one entity. The owner is referenced
//! polymorphically through [`OwnerRef`] (entity kind + id).
//!
//! ## Sections ([`Section`], [`Sections`])
//!
//! An SEO mapping is split into the reserved `meta`, `opengraph` and `twitter`
//! sections plus an implicit `base` section holding every other key.
//!
//! ## Builders ([`MetaBuilder`])
//!
//! Pluggable components that translate one section into the state of an
//! external SEO-rendering helper.
//!
//! ## Routes ([`MatchedRoute`])
//!
//! What the dispatcher needs from the host router: the route name and the
//! value bound to the route, if any.
//!
//! ## Association ([`HasPermalink`], [`Permalinkable`], [`after_save`])
//!
//! Entities optionally own a record and may refresh it after being saved.
//!
//! # Error Types
//!
//! - [`PermalinkError`] - Top-level error type
//! - [`BuildError`] - Builder invocation errors
//! - [`ConfigError`] - Configuration loading errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod association;
mod builder;
mod error;
mod record;
mod route;
mod seo;

// Re-exports
pub use association::{HasPermalink, Permalinkable, SaveOutcome, after_save};
pub use builder::MetaBuilder;
pub use error::{BoxError, BuildError, ConfigError, PermalinkError};
pub use record::{OwnerRef, PermalinkRecord};
pub use route::MatchedRoute;
pub use seo::{SeoMap, Section, Sections, UnknownSection, value_kind};

/// Re-export of the JSON value type carried by SEO mappings.
pub use serde_json::Value;
