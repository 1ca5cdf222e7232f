//! A ready-made [`MatchedRoute`] for hosts and tests.

use permalink_core::{MatchedRoute, PermalinkRecord};
use std::{any::Any, fmt};

/// A matched route: an optional name plus an optional bound value.
#[derive(Default)]
pub struct RouteMatch {
    name: Option<String>,
    binding: Option<Box<dyn Any + Send + Sync>>,
}

impl RouteMatch {
    /// A route with the given name and nothing bound.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            binding: None,
        }
    }

    /// A route without a name.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Bind a value of any type to the route.
    pub fn bind<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.binding = Some(Box::new(value));
        self
    }

    /// Bind a permalink record to the route.
    pub fn with_permalink(self, record: PermalinkRecord) -> Self {
        self.bind(record)
    }
}

impl MatchedRoute for RouteMatch {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn binding(&self) -> Option<&dyn Any> {
        self.binding.as_deref().map(|b| b as &dyn Any)
    }
}

impl fmt::Debug for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("name", &self.name)
            .field("bound", &self.binding.is_some())
            .finish()
    }
}
