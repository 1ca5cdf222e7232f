use super::{apply_page_field, fields};
use crate::document::SeoDocument;
use permalink_core::{BoxError, MetaBuilder, SeoMap, Section};

/// Builder for the implicit base section.
///
/// Applies page-level fields and ignores every other key, since the base
/// section also carries whatever unrelated data the owner stored alongside.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseBuilder;

impl MetaBuilder<SeoDocument> for BaseBuilder {
    fn translate(&self, helper: &mut SeoDocument, data: &SeoMap) -> Result<(), BoxError> {
        for (key, value) in fields(data) {
            apply_page_field(helper, key, value)?;
        }
        Ok(())
    }

    fn disable(&self, helper: &mut SeoDocument) {
        helper.disable(Section::Base);
    }
}
