//! Permalink association for arbitrary entities.
//!
//! An entity owns at most one [`PermalinkRecord`]. Hosts call [`after_save`]
//! once each successful write has completed; the entity decides whether its
//! permalink needs refreshing.

use crate::{
    error::{BoxError, PermalinkError},
    record::PermalinkRecord,
};

/// An entity that may own a permalink record.
pub trait HasPermalink {
    /// The associated record, if any.
    fn permalink(&self) -> Option<&PermalinkRecord>;

    /// Check if the entity has a permalink record.
    fn has_permalink(&self) -> bool {
        self.permalink().is_some()
    }
}

/// An entity that refreshes its permalink when saved.
pub trait Permalinkable: HasPermalink {
    /// Whether the permalink should be refreshed after a save.
    ///
    /// `None` means the entity makes no decision, and the save hook does
    /// nothing.
    fn update_permalink_on_save(&self) -> Option<bool> {
        None
    }

    /// Recompute and store the entity's permalink.
    fn update_permalink(&mut self) -> Result<(), BoxError>;
}

/// What the save hook did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entity makes no decision about refreshing.
    Undecided,
    /// The entity declined a refresh.
    Skipped,
    /// The permalink was refreshed.
    Updated,
}

/// Post-persist notification for an entity.
///
/// Call exactly once after each successful save. A failing update is
/// returned to the caller as [`PermalinkError::Update`]; the write itself has
/// already happened.
pub fn after_save<E>(entity: &mut E) -> Result<SaveOutcome, PermalinkError>
where
    E: Permalinkable + ?Sized,
{
    match entity.update_permalink_on_save() {
        None => Ok(SaveOutcome::Undecided),
        Some(false) => Ok(SaveOutcome::Skipped),
        Some(true) => {
            entity.update_permalink().map_err(PermalinkError::Update)?;
            Ok(SaveOutcome::Updated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OwnerRef;

    struct Page {
        id: u64,
        decision: Option<bool>,
        fail: bool,
        updates: usize,
        permalink: Option<PermalinkRecord>,
    }

    impl Page {
        fn new(decision: Option<bool>) -> Self {
            Self {
                id: 1,
                decision,
                fail: false,
                updates: 0,
                permalink: None,
            }
        }
    }

    impl HasPermalink for Page {
        fn permalink(&self) -> Option<&PermalinkRecord> {
            self.permalink.as_ref()
        }
    }

    impl Permalinkable for Page {
        fn update_permalink_on_save(&self) -> Option<bool> {
            self.decision
        }

        fn update_permalink(&mut self) -> Result<(), BoxError> {
            if self.fail {
                return Err("slug collision".into());
            }
            self.updates += 1;
            self.permalink = Some(PermalinkRecord::new(OwnerRef::new("page", self.id)));
            Ok(())
        }
    }

    #[test]
    fn test_declined_update_is_not_invoked() {
        let mut page = Page::new(Some(false));
        assert_eq!(after_save(&mut page).unwrap(), SaveOutcome::Skipped);
        assert_eq!(page.updates, 0);
        assert!(!page.has_permalink());
    }

    #[test]
    fn test_undecided_entity_is_left_alone() {
        let mut page = Page::new(None);
        assert_eq!(after_save(&mut page).unwrap(), SaveOutcome::Undecided);
        assert_eq!(page.updates, 0);
    }

    #[test]
    fn test_requested_update_runs_once() {
        let mut page = Page::new(Some(true));
        assert_eq!(after_save(&mut page).unwrap(), SaveOutcome::Updated);
        assert_eq!(page.updates, 1);
        assert!(page.has_permalink());
    }

    #[test]
    fn test_update_failure_propagates() {
        let mut page = Page::new(Some(true));
        page.fail = true;

        let err = after_save(&mut page).unwrap_err();
        assert!(matches!(err, PermalinkError::Update(_)));
        assert!(!page.has_permalink());
    }
}
