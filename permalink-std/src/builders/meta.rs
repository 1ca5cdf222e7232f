use super::{apply_page_field, fields, text};
use crate::document::SeoDocument;
use permalink_core::{BoxError, MetaBuilder, SeoMap, Section};

/// Builder for the `meta` section.
///
/// Page-level fields (`title`, `description`, `keywords`, `canonical`,
/// `robots`) update the document; any other key becomes a `<meta name>` tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaTagsBuilder;

impl MetaBuilder<SeoDocument> for MetaTagsBuilder {
    fn translate(&self, helper: &mut SeoDocument, data: &SeoMap) -> Result<(), BoxError> {
        for (key, value) in fields(data) {
            if !apply_page_field(helper, key, value)? {
                helper.set_meta(key.as_str(), text(key, value)?);
            }
        }
        Ok(())
    }

    fn disable(&self, helper: &mut SeoDocument) {
        helper.disable(Section::Meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_tags() {
        let mut doc = SeoDocument::new();
        MetaTagsBuilder
            .build(
                &mut doc,
                Section::Meta,
                &json!({ "description": "d", "author": "Ada" }),
            )
            .unwrap();

        assert_eq!(doc.description(), Some("d"));
        assert_eq!(doc.meta("author"), Some("Ada"));
        assert_eq!(doc.meta("description"), None);
    }

    #[test]
    fn test_disable_clears_named_tags_only() {
        let mut doc = SeoDocument::new();
        doc.set_title("Kept?");
        doc.set_meta("generator", "site");

        MetaTagsBuilder
            .build(&mut doc, Section::Meta, &json!(false))
            .unwrap();

        assert_eq!(doc.meta("generator"), None);
        assert_eq!(doc.render(), "<title>Kept?</title>\n");
    }

    #[test]
    fn test_null_tag_is_skipped() {
        let mut doc = SeoDocument::new();
        MetaTagsBuilder
            .build(
                &mut doc,
                Section::Meta,
                &json!({ "author": null, "robots": "noindex" }),
            )
            .unwrap();

        assert_eq!(doc.meta("author"), None);
        assert_eq!(doc.robots(), Some("noindex"));
    }
}
