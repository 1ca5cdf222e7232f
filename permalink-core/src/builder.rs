//! # Builder Contract (MetaBuilder)
//!
//! A builder translates one section of an SEO mapping into the state of an
//! SEO-rendering helper `H` (meta tags, Open Graph properties, ...).
//!
//! The dispatcher invokes [`MetaBuilder::build`] at most once per section per
//! request. The provided `build` picks between `translate` and `disable`
//! based on the shape of the section data:
//!
//! - an object is translated,
//! - `true` is translated as an empty mapping,
//! - `false` disables the builder,
//! - anything else is rejected with [`BuildError::UnexpectedShape`].

use crate::{
    error::{BoxError, BuildError},
    seo::{SeoMap, Section, value_kind},
};
use serde_json::Value;
use std::sync::Arc;

/// Translates one SEO section into rendering-helper state.
///
/// Builders are shared by every request, so they take `&self` and receive the
/// per-request helper by mutable reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a builder for helper `{H}`",
    label = "missing `MetaBuilder` implementation",
    note = "Builders must implement `translate` and `disable` for the helper type `{H}`."
)]
pub trait MetaBuilder<H>: Send + Sync {
    /// Populate `helper` from the section's mapping.
    fn translate(&self, helper: &mut H, data: &SeoMap) -> Result<(), BoxError>;

    /// Remove anything this builder would contribute to `helper`.
    fn disable(&self, helper: &mut H);

    /// Entry point used by the dispatcher.
    fn build(&self, helper: &mut H, section: Section, data: &Value) -> Result<(), BuildError> {
        let translated = match data {
            Value::Object(map) => self.translate(helper, map),
            Value::Bool(true) => self.translate(helper, &SeoMap::new()),
            Value::Bool(false) => {
                self.disable(helper);
                return Ok(());
            }
            other => {
                return Err(BuildError::UnexpectedShape {
                    section,
                    found: value_kind(other),
                });
            }
        };

        translated.map_err(|source| BuildError::Translate { section, source })
    }
}

// Shared builders, as stored in a registry.
impl<H, B: MetaBuilder<H> + ?Sized> MetaBuilder<H> for Arc<B> {
    fn translate(&self, helper: &mut H, data: &SeoMap) -> Result<(), BoxError> {
        (**self).translate(helper, data)
    }

    fn disable(&self, helper: &mut H) {
        (**self).disable(helper)
    }

    fn build(&self, helper: &mut H, section: Section, data: &Value) -> Result<(), BuildError> {
        (**self).build(helper, section, data)
    }
}

impl<H, B: MetaBuilder<H> + ?Sized> MetaBuilder<H> for Box<B> {
    fn translate(&self, helper: &mut H, data: &SeoMap) -> Result<(), BoxError> {
        (**self).translate(helper, data)
    }

    fn disable(&self, helper: &mut H) {
        (**self).disable(helper)
    }

    fn build(&self, helper: &mut H, section: Section, data: &Value) -> Result<(), BuildError> {
        (**self).build(helper, section, data)
    }
}
