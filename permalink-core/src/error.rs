//! Error types for permalink dispatch.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PermalinkError`] - Top-level error type for all permalink operations
//! - [`BuildError`] - Errors raised while a builder runs
//! - [`ConfigError`] - Errors while loading static permalink configuration
//!
//! Boxed errors converted with `?` become [`PermalinkError::Custom`]; only the
//! save hook reports [`PermalinkError::Update`].
//!
//! A missing SEO mapping or an unregistered builder is never an error: the
//! dispatcher simply does nothing for it.

use crate::seo::Section;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all permalink operations.
#[derive(Error, Debug)]
pub enum PermalinkError {
    /// A builder failed while translating its section.
    #[error("builder error: {0}")]
    Build(#[from] BuildError),

    /// The entity's own permalink update failed during the save hook.
    #[error("permalink update failed")]
    Update(#[source] BoxError),

    /// Static permalink configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error raised by host code.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while a builder handles a section.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The builder's `translate` returned an error.
    #[error("`{section}` builder failed to translate")]
    Translate {
        /// Section being built.
        section: Section,
        /// Error reported by the builder.
        #[source]
        source: BoxError,
    },

    /// The section data had a shape the builder cannot handle.
    #[error("`{section}` section expects an object or boolean, found {found}")]
    UnexpectedShape {
        /// Section being built.
        section: Section,
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

impl BuildError {
    /// The section the failing builder was registered for.
    pub fn section(&self) -> Section {
        match self {
            BuildError::Translate { section, .. } | BuildError::UnexpectedShape { section, .. } => {
                *section
            }
        }
    }
}

/// Errors that can occur while loading static permalink configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("invalid permalink configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A route entry is not an SEO mapping.
    #[error("permalink for route `{route}` must be an object, found {found}")]
    InvalidSeo {
        /// Route name of the offending entry.
        route: String,
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

// Convenience conversions
impl From<BoxError> for PermalinkError {
    fn from(err: BoxError) -> Self {
        PermalinkError::Custom(err)
    }
}
