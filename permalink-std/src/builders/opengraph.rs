use super::{fields, text, texts};
use crate::document::SeoDocument;
use permalink_core::{BoxError, MetaBuilder, SeoMap, Section};

/// Builder for the `opengraph` section.
///
/// Keys may carry the `og:` prefix or not. A scalar replaces the property.
/// An array replaces every earlier value of the property with one entry per
/// element, in order, so an empty array removes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGraphBuilder;

impl MetaBuilder<SeoDocument> for OpenGraphBuilder {
    fn translate(&self, helper: &mut SeoDocument, data: &SeoMap) -> Result<(), BoxError> {
        for (key, value) in fields(data) {
            let property = key.strip_prefix("og:").unwrap_or(key);
            if value.is_array() {
                let values = texts(key, value)?;
                helper.clear_opengraph(property);
                for item in values {
                    helper.push_opengraph(property, item);
                }
            } else {
                helper.set_opengraph(property, text(key, value)?);
            }
        }
        Ok(())
    }

    fn disable(&self, helper: &mut SeoDocument) {
        helper.disable(Section::OpenGraph);
    }
}
