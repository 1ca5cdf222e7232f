//! Builder lookup by section.
//!
//! The dispatcher asks a [`BuilderProvider`] for the builder of each section
//! that has data. [`BuilderRegistry`] is the standard provider: a fixed map
//! from [`Section`] to a shared builder, assembled once at startup.

use permalink_core::{MetaBuilder, Section};
use std::{collections::HashMap, fmt, sync::Arc};

/// Resolves the builder registered for a section.
///
/// Implementors decide at runtime which builder (if any) handles a section
/// for helper type `H`.
pub trait BuilderProvider<H>: Send + Sync {
    /// The builder for `section`, if one is registered.
    fn resolve(&self, section: Section) -> Option<&dyn MetaBuilder<H>>;

    /// Check whether a builder is registered for `section`.
    fn has(&self, section: Section) -> bool {
        self.resolve(section).is_some()
    }
}

impl<H, P: BuilderProvider<H> + ?Sized> BuilderProvider<H> for Arc<P> {
    fn resolve(&self, section: Section) -> Option<&dyn MetaBuilder<H>> {
        (**self).resolve(section)
    }
}

/// A registry of builders keyed by section.
pub struct BuilderRegistry<H> {
    builders: HashMap<Section, Arc<dyn MetaBuilder<H>>>,
}

impl<H> BuilderRegistry<H> {
    /// Start building a registry.
    pub fn builder() -> BuilderRegistryBuilder<H> {
        BuilderRegistryBuilder::new()
    }

    /// Create a registry with no builders.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// The builder for `section`, if one is registered.
    pub fn get(&self, section: Section) -> Option<&dyn MetaBuilder<H>> {
        self.builders.get(&section).map(|b| &**b)
    }

    /// Registered sections, in dispatch order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|s| self.builders.contains_key(s))
    }

    /// Get the number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<H> BuilderProvider<H> for BuilderRegistry<H> {
    fn resolve(&self, section: Section) -> Option<&dyn MetaBuilder<H>> {
        self.get(section)
    }
}

impl<H> Default for BuilderRegistry<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> Clone for BuilderRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            builders: self.builders.clone(),
        }
    }
}

impl<H> fmt::Debug for BuilderRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("sections", &self.sections().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for constructing a [`BuilderRegistry`].
///
/// Registering a second builder for the same section replaces the first.
pub struct BuilderRegistryBuilder<H> {
    builders: HashMap<Section, Arc<dyn MetaBuilder<H>>>,
}

impl<H> Default for BuilderRegistryBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> BuilderRegistryBuilder<H> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register a builder for `section`.
    pub fn register<B>(self, section: Section, builder: B) -> Self
    where
        B: MetaBuilder<H> + 'static,
    {
        self.register_shared(section, Arc::new(builder))
    }

    /// Register an already shared builder for `section`.
    pub fn register_shared(mut self, section: Section, builder: Arc<dyn MetaBuilder<H>>) -> Self {
        self.builders.insert(section, builder);
        self
    }

    /// Build the registry.
    pub fn build(self) -> BuilderRegistry<H> {
        BuilderRegistry {
            builders: self.builders,
        }
    }
}
