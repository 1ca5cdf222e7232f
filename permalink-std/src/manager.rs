//! Per-request builder dispatch.
//!
//! [`PermalinkManager::run_builders`] resolves the SEO mapping of the matched
//! route, partitions it into sections and hands every section that has data
//! to the builder registered for it.
//!
//! Resolution order:
//! 1. a [`PermalinkRecord`](permalink_core::PermalinkRecord) bound to the route,
//! 2. the [`StaticPermalinks`] entry for the route name,
//! 3. nothing: no builder runs and no error is reported.
//!
//! Sections without data and sections without a registered builder are
//! skipped. Builder failures are returned to the caller untouched.

use crate::{
    config::PermalinkConfig,
    registry::{BuilderProvider, BuilderRegistry},
    table::StaticPermalinks,
};
use permalink_core::{MatchedRoute, PermalinkError, Section, Sections, SeoMap};
use std::marker::PhantomData;

/// Where the SEO mapping of a dispatch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoSource {
    /// A permalink record bound to the route.
    Bound,
    /// The static table, by route name.
    Static,
}

/// Outcome of one dispatch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Source of the SEO mapping, `None` when the route has no permalink.
    pub source: Option<SeoSource>,
    /// Sections whose builder ran, in order.
    pub invoked: Vec<Section>,
}

impl Dispatch {
    /// Check if the route resolved to an SEO mapping.
    pub fn is_resolved(&self) -> bool {
        self.source.is_some()
    }
}

/// Resolves route SEO mappings and dispatches them to builders.
///
/// `H` is the SEO-rendering helper the builders write into; `P` provides the
/// builders. The manager holds no per-request state and can be shared across
/// threads once configured.
pub struct PermalinkManager<H, P = BuilderRegistry<H>> {
    provider: P,
    statics: StaticPermalinks,
    _helper: PhantomData<fn(&mut H)>,
}

impl<H, P> PermalinkManager<H, P>
where
    P: BuilderProvider<H>,
{
    /// Create a manager with an empty static table.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            statics: StaticPermalinks::new(),
            _helper: PhantomData,
        }
    }

    /// Create a manager from loaded configuration.
    pub fn from_config(config: PermalinkConfig, provider: P) -> Self {
        Self::new(provider).with_permalinks(config.permalinks)
    }

    /// Replace the whole static table.
    pub fn permalinks(&mut self, permalinks: impl Into<StaticPermalinks>) -> &mut Self {
        self.statics = permalinks.into();
        self
    }

    /// Builder-style [`permalinks`](Self::permalinks).
    pub fn with_permalinks(mut self, permalinks: impl Into<StaticPermalinks>) -> Self {
        self.permalinks(permalinks);
        self
    }

    /// Register the SEO mapping of one static route.
    pub fn add_permalink(&mut self, route: impl Into<String>, seo: SeoMap) -> &mut Self {
        self.statics.insert(route, seo);
        self
    }

    /// The static route table.
    pub fn static_permalinks(&self) -> &StaticPermalinks {
        &self.statics
    }

    /// The builder provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Replace the builder provider.
    pub fn set_provider(&mut self, provider: P) {
        self.provider = provider;
    }

    /// The SEO mapping for `route` and where it came from.
    pub fn current_seo<'a, R>(&'a self, route: &'a R) -> Option<(SeoSource, &'a SeoMap)>
    where
        R: MatchedRoute + ?Sized,
    {
        if let Some(permalink) = route.permalink() {
            return Some((SeoSource::Bound, &permalink.seo));
        }

        route
            .name()
            .and_then(|name| self.statics.get(name))
            .map(|seo| (SeoSource::Static, seo))
    }

    /// Run the builders for the matched route against `helper`.
    pub fn run_builders<R>(&self, route: &R, helper: &mut H) -> Result<Dispatch, PermalinkError>
    where
        R: MatchedRoute + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("permalink.dispatch", route = route.name().unwrap_or("")).entered();

        let Some((source, seo)) = self.current_seo(route) else {
            #[cfg(feature = "tracing")]
            tracing::trace!("no permalink for route");
            return Ok(Dispatch::default());
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?source, keys = seo.len(), "resolved permalink");

        let sections = Sections::partition(seo);
        let mut invoked = Vec::new();

        for (section, data) in sections.iter() {
            let Some(data) = data else {
                #[cfg(feature = "tracing")]
                tracing::trace!(%section, "no data, skipping");
                continue;
            };
            let Some(builder) = self.provider.resolve(section) else {
                #[cfg(feature = "tracing")]
                tracing::trace!(binding = section.binding(), "no builder registered");
                continue;
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(binding = section.binding(), "running builder");

            builder.build(helper, section, data)?;
            invoked.push(section);
        }

        Ok(Dispatch {
            source: Some(source),
            invoked,
        })
    }
}

impl<H, P: Default + BuilderProvider<H>> Default for PermalinkManager<H, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
