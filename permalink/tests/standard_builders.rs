//! End-to-end rendering with the standard builders.

use permalink::{
    PermalinkConfig, PermalinkManager, RouteMatch, Section, SeoDocument,
    builders::standard_registry,
};
use std::{sync::Arc, thread};

mod common;
use common::record;

const CONFIG: &str = r#"{
    "permalinks": {
        "home": {
            "title": "Home",
            "meta": { "description": "Welcome", "author": "Team" },
            "opengraph": { "type": "website", "image": ["/a.png", "/b.png"] },
            "twitter": { "card": "summary" }
        },
        "legal": {
            "title": "Legal",
            "meta": { "robots": "noindex" },
            "opengraph": false,
            "twitter": false
        }
    }
}"#;

fn manager() -> PermalinkManager<SeoDocument> {
    let config = PermalinkConfig::from_json_str(CONFIG).unwrap();
    PermalinkManager::from_config(config, standard_registry())
}

#[test]
fn test_render_static_home() {
    let mut doc = SeoDocument::new();
    let dispatch = manager()
        .run_builders(&RouteMatch::named("home"), &mut doc)
        .unwrap();

    assert_eq!(dispatch.invoked, Section::ALL.to_vec());
    assert_eq!(
        doc.render(),
        concat!(
            "<title>Home</title>\n",
            "<meta name=\"description\" content=\"Welcome\">\n",
            "<meta name=\"author\" content=\"Team\">\n",
            "<meta property=\"og:type\" content=\"website\">\n",
            "<meta property=\"og:image\" content=\"/a.png\">\n",
            "<meta property=\"og:image\" content=\"/b.png\">\n",
            "<meta name=\"twitter:card\" content=\"summary\">\n",
        )
    );
}

#[test]
fn test_disabled_sections_drop_host_defaults() {
    let mut doc = SeoDocument::new();
    doc.set_opengraph("site_name", "Example");
    doc.set_twitter("site", "@example");

    manager()
        .run_builders(&RouteMatch::named("legal"), &mut doc)
        .unwrap();

    assert!(doc.is_disabled(Section::OpenGraph));
    assert!(doc.is_disabled(Section::Twitter));
    assert_eq!(
        doc.render(),
        concat!(
            "<title>Legal</title>\n",
            "<meta name=\"robots\" content=\"noindex\">\n",
        )
    );
}

#[test]
fn test_null_fields_do_not_break_rendering() {
    let route = RouteMatch::named("pages.show").with_permalink(record(
        "page",
        3,
        serde_json::json!({
            "title": "Home",
            "description": null,
            "meta": { "author": "A", "robots": null }
        }),
    ));

    let mut doc = SeoDocument::new();
    let dispatch = manager().run_builders(&route, &mut doc).unwrap();

    assert_eq!(dispatch.invoked, vec![Section::Base, Section::Meta]);
    assert_eq!(
        doc.render(),
        concat!(
            "<title>Home</title>\n",
            "<meta name=\"author\" content=\"A\">\n",
        )
    );
}

#[test]
fn test_disabled_meta_keeps_base_title() {
    let route = RouteMatch::named("pages.show").with_permalink(record(
        "page",
        4,
        serde_json::json!({ "title": "Kept?", "meta": false }),
    ));

    let mut doc = SeoDocument::new();
    doc.set_meta("generator", "site");
    manager().run_builders(&route, &mut doc).unwrap();

    assert_eq!(doc.title(), Some("Kept?"));
    assert_eq!(doc.render(), "<title>Kept?</title>\n");
}

#[test]
fn test_opengraph_images_replace_host_default() {
    let mut doc = SeoDocument::new();
    doc.set_opengraph("image", "/default.png");

    manager()
        .run_builders(&RouteMatch::named("home"), &mut doc)
        .unwrap();

    let images: Vec<_> = doc
        .render()
        .lines()
        .filter(|line| line.contains("og:image"))
        .map(str::to_string)
        .collect();
    assert_eq!(
        images,
        vec![
            "<meta property=\"og:image\" content=\"/a.png\">",
            "<meta property=\"og:image\" content=\"/b.png\">",
        ]
    );
}

#[test]
fn test_invalid_field_is_reported() {
    let route = RouteMatch::named("posts.show")
        .with_permalink(record("post", 2, serde_json::json!({ "twitter": { "card": [1] } })));

    let mut doc = SeoDocument::new();
    let err = manager().run_builders(&route, &mut doc).unwrap_err();
    assert!(err.to_string().contains("twitter"));
}

#[test]
fn test_shared_manager_across_threads() {
    let manager = Arc::new(manager());

    let handles: Vec<_> = ["home", "legal", "missing"]
        .into_iter()
        .map(|name| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let mut doc = SeoDocument::new();
                manager
                    .run_builders(&RouteMatch::named(name), &mut doc)
                    .unwrap();
                doc.title().map(str::to_string)
            })
        })
        .collect();

    let titles: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        titles,
        vec![Some("Home".to_string()), Some("Legal".to_string()), None]
    );
}
