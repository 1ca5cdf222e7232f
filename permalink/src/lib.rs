//! # permalink - Route-Bound SEO Metadata
//!
//! `permalink` binds SEO configuration to the route serving a request and
//! dispatches each section of it to a pluggable builder.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use permalink::prelude::*;
//!
//! let manager = PermalinkManager::new(standard_registry())
//!     .with_permalinks(PermalinkConfig::from_json_str(CONFIG)?.permalinks);
//!
//! // Per request:
//! let mut doc = SeoDocument::new();
//! manager.run_builders(&route, &mut doc)?;
//! let head = doc.render();
//! ```
//!
//! ## Entities
//!
//! Entities owning a permalink implement [`HasPermalink`] and
//! [`Permalinkable`]; hosts call [`after_save`] once a write has completed.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use permalink_core::{
    // Errors
    BoxError,
    BuildError,
    ConfigError,
    // Association
    HasPermalink,
    // Routes
    MatchedRoute,
    // Builders
    MetaBuilder,
    // Records
    OwnerRef,
    PermalinkError,
    PermalinkRecord,
    Permalinkable,
    SaveOutcome,
    // Sections
    Section,
    Sections,
    SeoMap,
    UnknownSection,
    Value,
    after_save,
    value_kind,
};

pub use permalink_std::{
    config::PermalinkConfig,
    document::SeoDocument,
    manager::{Dispatch, PermalinkManager, SeoSource},
    registry::{BuilderProvider, BuilderRegistry, BuilderRegistryBuilder},
    route::RouteMatch,
    store::PermalinkStore,
    table::StaticPermalinks,
};

/// Standard builders for [`SeoDocument`].
pub mod builders {
    pub use permalink_std::builders::{
        BaseBuilder, FieldError, MetaTagsBuilder, OpenGraphBuilder, TwitterCardBuilder,
        standard_registry,
    };
}

/// Testing utilities.
pub mod testing {
    pub use permalink_std::testing::{
        BuildCall, CountingProvider, FailingBuilder, RecordingBuilder,
    };
}

/// Prelude module - common imports for permalink.
///
/// # Usage
///
/// ```rust,ignore
/// use permalink::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BuilderRegistry, HasPermalink, MatchedRoute, MetaBuilder, PermalinkConfig,
        PermalinkError, PermalinkManager, PermalinkRecord, Permalinkable, RouteMatch, Section,
        SeoDocument, SeoMap, after_save, builders::standard_registry,
    };
}

#[cfg(feature = "macros")]
pub use permalink_macros::HasPermalink;
