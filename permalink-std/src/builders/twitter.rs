use super::{fields, text};
use crate::document::SeoDocument;
use permalink_core::{BoxError, MetaBuilder, SeoMap, Section};

/// Builder for the `twitter` section (`twitter:*` card properties).
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterCardBuilder;

impl MetaBuilder<SeoDocument> for TwitterCardBuilder {
    fn translate(&self, helper: &mut SeoDocument, data: &SeoMap) -> Result<(), BoxError> {
        for (key, value) in fields(data) {
            let name = key.strip_prefix("twitter:").unwrap_or(key);
            helper.set_twitter(name, text(key, value)?);
        }
        Ok(())
    }

    fn disable(&self, helper: &mut SeoDocument) {
        helper.disable(Section::Twitter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card() {
        let mut doc = SeoDocument::new();
        TwitterCardBuilder
            .build(
                &mut doc,
                Section::Twitter,
                &json!({ "card": "summary_large_image", "twitter:site": "@example" }),
            )
            .unwrap();

        assert_eq!(doc.twitter("card"), Some("summary_large_image"));
        assert_eq!(doc.twitter("site"), Some("@example"));
    }

    #[test]
    fn test_true_is_a_noop() {
        let mut doc = SeoDocument::new();
        TwitterCardBuilder
            .build(&mut doc, Section::Twitter, &json!(true))
            .unwrap();
        assert!(doc.is_empty());
    }
}
