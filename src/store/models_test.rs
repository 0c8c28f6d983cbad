//! Tests for page models and their JSON projections.

use super::models::*;

fn page_with_content(content: &str) -> Page {
    Page {
        id: "1".to_string(),
        title: "Title".to_string(),
        space: Space {
            key: "DEV".to_string(),
            name: "Development".to_string(),
        },
        url: "https://example.test/1".to_string(),
        content: content.to_string(),
        created: "2023-01-01T00:00:00.000Z".to_string(),
        creator: Person {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
        },
        last_modified: "2023-01-02T00:00:00.000Z".to_string(),
        last_modifier: Person {
            name: "B".to_string(),
            email: "b@example.com".to_string(),
        },
        version: 2,
        labels: vec!["one".to_string()],
    }
}

#[test]
fn excerpt_keeps_short_content_verbatim() {
    assert_eq!(excerpt("short body"), "short body");
    assert_eq!(excerpt(""), "");
}

#[test]
fn excerpt_keeps_content_at_exact_limit() {
    let content = "x".repeat(EXCERPT_CHARS);
    assert_eq!(excerpt(&content), content);
}

#[test]
fn excerpt_truncates_long_content_with_ellipsis() {
    let content = "y".repeat(EXCERPT_CHARS + 1);
    let result = excerpt(&content);
    assert_eq!(result, format!("{}...", "y".repeat(EXCERPT_CHARS)));
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    let content = "é".repeat(EXCERPT_CHARS + 10);
    let result = excerpt(&content);
    assert_eq!(result.chars().count(), EXCERPT_CHARS + EXCERPT_ELLIPSIS.len());
    assert!(result.starts_with(&"é".repeat(EXCERPT_CHARS)));
}

#[test]
fn page_serializes_with_camel_case_fields() {
    let json = serde_json::to_value(page_with_content("body")).unwrap();
    assert_eq!(json["lastModified"], "2023-01-02T00:00:00.000Z");
    assert_eq!(json["lastModifier"]["email"], "b@example.com");
    assert!(json.get("last_modified").is_none());
}

#[test]
fn summary_replaces_content_with_excerpt() {
    let page = page_with_content(&"z".repeat(200));
    let json = serde_json::to_value(page.summary()).unwrap();

    assert!(json.get("content").is_none());
    assert_eq!(json["excerpt"].as_str().unwrap().len(), EXCERPT_CHARS + 3);
    assert_eq!(json["version"], 2);
}

#[test]
fn summary_field_order_matches_wire_format() {
    let page = page_with_content("body");
    let rendered = serde_json::to_string(&page.summary()).unwrap();

    let keys = [
        "\"id\"",
        "\"title\"",
        "\"space\"",
        "\"url\"",
        "\"excerpt\"",
        "\"created\"",
        "\"creator\"",
        "\"lastModified\"",
        "\"lastModifier\"",
        "\"version\"",
        "\"labels\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| rendered.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn page_content_splits_metadata_from_body() {
    let page = page_with_content("full body");
    let payload = PageContent::from(&page);

    assert_eq!(payload.content, "full body");
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["metadata"].get("content").is_none());
    assert_eq!(json["metadata"]["title"], "Title");
}
