//! The SEO-rendering helper filled by the standard builders.
//!
//! A [`SeoDocument`] is created per request, handed to
//! [`PermalinkManager::run_builders`](crate::manager::PermalinkManager::run_builders)
//! and finally rendered into the page `<head>`.

use permalink_core::Section;
use std::collections::BTreeSet;

/// Page metadata collected for one response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoDocument {
    title: Option<String>,
    description: Option<String>,
    keywords: Vec<String>,
    canonical: Option<String>,
    robots: Option<String>,
    meta: Vec<(String, String)>,
    opengraph: Vec<(String, String)>,
    twitter: Vec<(String, String)>,
    disabled: BTreeSet<Section>,
}

impl SeoDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The page `<title>`.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the page `<title>`.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The `description` meta tag.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the `description` meta tag.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Keywords, rendered comma separated.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Replace the keyword list.
    pub fn set_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
    }

    /// The canonical URL.
    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Set the `<link rel="canonical">` URL.
    pub fn set_canonical(&mut self, url: impl Into<String>) {
        self.canonical = Some(url.into());
    }

    /// The `robots` directive.
    pub fn robots(&self) -> Option<&str> {
        self.robots.as_deref()
    }

    /// Set the `robots` directive.
    pub fn set_robots(&mut self, robots: impl Into<String>) {
        self.robots = Some(robots.into());
    }

    /// Set a `<meta name>` tag, replacing one with the same name.
    pub fn set_meta(&mut self, name: impl Into<String>, content: impl Into<String>) {
        upsert(&mut self.meta, name.into(), content.into());
    }

    /// Content of the `<meta name>` tag called `name`.
    pub fn meta(&self, name: &str) -> Option<&str> {
        lookup(&self.meta, name)
    }

    /// Set an Open Graph property, replacing earlier values.
    ///
    /// `property` is given without the `og:` prefix.
    pub fn set_opengraph(&mut self, property: impl Into<String>, content: impl Into<String>) {
        upsert(&mut self.opengraph, property.into(), content.into());
    }

    /// Append an Open Graph property, keeping earlier values (e.g. several
    /// `og:image` entries).
    pub fn push_opengraph(&mut self, property: impl Into<String>, content: impl Into<String>) {
        self.opengraph.push((property.into(), content.into()));
    }

    /// Remove every value of the Open Graph property.
    pub fn clear_opengraph(&mut self, property: &str) {
        self.opengraph.retain(|(k, _)| k != property);
    }

    /// First value of the Open Graph property.
    pub fn opengraph(&self, property: &str) -> Option<&str> {
        lookup(&self.opengraph, property)
    }

    /// Set a Twitter card property, given without the `twitter:` prefix.
    pub fn set_twitter(&mut self, name: impl Into<String>, content: impl Into<String>) {
        upsert(&mut self.twitter, name.into(), content.into());
    }

    /// Value of the Twitter card property.
    pub fn twitter(&self, name: &str) -> Option<&str> {
        lookup(&self.twitter, name)
    }

    /// Drop everything stored for `section`.
    ///
    /// The page-level fields (title, description, keywords, canonical,
    /// robots) belong to the base section. The meta section only owns the
    /// named `<meta>` tags.
    pub fn clear(&mut self, section: Section) {
        match section {
            Section::Base => self.clear_page_fields(),
            Section::Meta => self.meta.clear(),
            Section::OpenGraph => self.opengraph.clear(),
            Section::Twitter => self.twitter.clear(),
        }
    }

    fn clear_page_fields(&mut self) {
        self.title = None;
        self.description = None;
        self.keywords.clear();
        self.canonical = None;
        self.robots = None;
    }

    /// Clear `section` and keep it out of the rendered output.
    pub fn disable(&mut self, section: Section) {
        self.clear(section);
        self.disabled.insert(section);
    }

    /// Check if `section` was disabled for this response.
    pub fn is_disabled(&self, section: Section) -> bool {
        self.disabled.contains(&section)
    }

    /// Check if nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.render().is_empty()
    }

    /// Render the collected metadata as HTML head tags, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.is_disabled(Section::Base) {
            if let Some(title) = &self.title {
                out.push_str(&format!("<title>{}</title>\n", escape(title)));
            }
            if let Some(description) = &self.description {
                meta_tag(&mut out, "name", "description", description);
            }
            if !self.keywords.is_empty() {
                meta_tag(&mut out, "name", "keywords", &self.keywords.join(", "));
            }
            if let Some(robots) = &self.robots {
                meta_tag(&mut out, "name", "robots", robots);
            }
            if let Some(canonical) = &self.canonical {
                out.push_str(&format!(
                    "<link rel=\"canonical\" href=\"{}\">\n",
                    escape(canonical)
                ));
            }
        }
        if !self.is_disabled(Section::Meta) {
            for (name, content) in &self.meta {
                meta_tag(&mut out, "name", name, content);
            }
        }
        if !self.is_disabled(Section::OpenGraph) {
            for (property, content) in &self.opengraph {
                meta_tag(&mut out, "property", &format!("og:{property}"), content);
            }
        }
        if !self.is_disabled(Section::Twitter) {
            for (name, content) in &self.twitter {
                meta_tag(&mut out, "name", &format!("twitter:{name}"), content);
            }
        }

        out
    }
}

fn upsert(entries: &mut Vec<(String, String)>, key: String, value: String) {
    entries.retain(|(k, _)| *k != key);
    entries.push((key, value));
}

fn lookup<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn meta_tag(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str(&format!(
        "<meta {attr}=\"{}\" content=\"{}\">\n",
        escape(key),
        escape(content)
    ));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_and_escaping() {
        let mut doc = SeoDocument::new();
        doc.set_title("Tom & Jerry");
        doc.set_description("A \"classic\"");
        doc.set_opengraph("type", "video.movie");
        doc.set_twitter("card", "summary");

        assert_eq!(
            doc.render(),
            concat!(
                "<title>Tom &amp; Jerry</title>\n",
                "<meta name=\"description\" content=\"A &quot;classic&quot;\">\n",
                "<meta property=\"og:type\" content=\"video.movie\">\n",
                "<meta name=\"twitter:card\" content=\"summary\">\n",
            )
        );
    }

    #[test]
    fn test_set_meta_replaces_by_name() {
        let mut doc = SeoDocument::new();
        doc.set_meta("author", "a");
        doc.set_meta("author", "b");

        assert_eq!(doc.meta("author"), Some("b"));
        assert_eq!(doc.render().matches("author").count(), 1);
    }

    #[test]
    fn test_push_opengraph_keeps_duplicates() {
        let mut doc = SeoDocument::new();
        doc.push_opengraph("image", "/a.png");
        doc.push_opengraph("image", "/b.png");

        assert_eq!(doc.opengraph("image"), Some("/a.png"));
        assert_eq!(doc.render().lines().count(), 2);
    }

    #[test]
    fn test_disable_suppresses_section() {
        let mut doc = SeoDocument::new();
        doc.set_twitter("card", "summary");
        doc.disable(Section::Twitter);
        doc.set_twitter("site", "@late");

        assert!(doc.is_disabled(Section::Twitter));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_disable_meta_keeps_page_fields() {
        let mut doc = SeoDocument::new();
        doc.set_title("Kept");
        doc.set_canonical("https://example.com/");
        doc.set_meta("author", "me");
        doc.disable(Section::Meta);

        assert_eq!(doc.title(), Some("Kept"));
        assert_eq!(doc.meta("author"), None);
        assert_eq!(
            doc.render(),
            concat!(
                "<title>Kept</title>\n",
                "<link rel=\"canonical\" href=\"https://example.com/\">\n",
            )
        );
    }

    #[test]
    fn test_clear_opengraph_drops_every_value() {
        let mut doc = SeoDocument::new();
        doc.push_opengraph("image", "/a.png");
        doc.push_opengraph("image", "/b.png");
        doc.set_opengraph("type", "website");
        doc.clear_opengraph("image");

        assert_eq!(doc.opengraph("image"), None);
        assert_eq!(doc.opengraph("type"), Some("website"));
    }

    #[test]
    fn test_disable_base_keeps_named_meta() {
        let mut doc = SeoDocument::new();
        doc.set_title("Home");
        doc.set_meta("author", "me");
        doc.disable(Section::Base);

        assert_eq!(doc.title(), None);
        assert_eq!(
            doc.render(),
            "<meta name=\"author\" content=\"me\">\n"
        );
    }
}
