//! What the dispatcher needs from the host's matched route.

use crate::record::PermalinkRecord;
use std::any::Any;

/// The route matched for the current request.
///
/// Hosts implement this for their router's route type. The dispatcher only
/// asks for the route name and for the value bound to the route.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a matched route",
    label = "missing `MatchedRoute` implementation",
    note = "Implement `name` (and `binding` for entity-bound routes)."
)]
pub trait MatchedRoute {
    /// Logical name of the route, if it has one.
    fn name(&self) -> Option<&str>;

    /// The value bound to the route, of any type.
    fn binding(&self) -> Option<&dyn Any> {
        None
    }

    /// The bound permalink record.
    ///
    /// Returns `None` when nothing is bound or when the bound value is not a
    /// [`PermalinkRecord`].
    fn permalink(&self) -> Option<&PermalinkRecord> {
        self.binding()?.downcast_ref::<PermalinkRecord>()
    }
}

impl<R: MatchedRoute + ?Sized> MatchedRoute for &R {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn binding(&self) -> Option<&dyn Any> {
        (**self).binding()
    }

    fn permalink(&self) -> Option<&PermalinkRecord> {
        (**self).permalink()
    }
}
