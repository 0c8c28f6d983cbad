//! Tests for the page scan against the seeded fixture.

use super::engine::*;
use super::query::SearchQuery;
use crate::store::{EXCERPT_CHARS, seed_pages};

fn ids(results: &[crate::store::PageSummary]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn title_match_is_case_insensitive() {
    let results = search_pages(seed_pages(), &SearchQuery::new("PRODUCT ROADMAP"));
    assert_eq!(ids(&results), vec!["135792468"]);
}

#[test]
fn content_match() {
    let results = search_pages(seed_pages(), &SearchQuery::new("eslint"));
    assert_eq!(ids(&results), vec!["246813579"]);
}

#[test]
fn label_match() {
    let mut page = seed_pages()[0].clone();
    page.title = "Untitled".to_string();
    page.content = "Nothing to see".to_string();
    page.labels = vec!["Onboarding-Checklist".to_string()];

    let pages = [page];
    let results = search_pages(&pages, &SearchQuery::new("checklist"));
    assert_eq!(ids(&results), vec!["123456789"]);
}

#[test]
fn documentation_in_dev_space_returns_both_pages() {
    let query = SearchQuery::new("documentation").with_spaces(Some("DEV"));
    let results = search_pages(seed_pages(), &query);

    assert_eq!(ids(&results), vec!["123456789", "987654321"]);
    assert_eq!(results[0].title, "Project Documentation");
    assert_eq!(results[1].title, "API Reference");
    assert!(results.iter().all(|r| r.space.key == "DEV"));
}

#[test]
fn space_filter_excludes_other_spaces() {
    let query = SearchQuery::new("q2").with_spaces(Some("TEAM"));
    let results = search_pages(seed_pages(), &query);
    assert_eq!(ids(&results), vec!["456789123"]);
}

#[test]
fn unknown_space_returns_nothing() {
    let query = SearchQuery::new("documentation").with_spaces(Some("NOPE"));
    assert!(search_pages(seed_pages(), &query).is_empty());
}

#[test]
fn limit_stops_scan_early_in_fixture_order() {
    let query = SearchQuery::new("").with_limit(2);
    let results = search_pages(seed_pages(), &query);
    assert_eq!(ids(&results), vec!["123456789", "987654321"]);
}

#[test]
fn zero_limit_returns_nothing() {
    let query = SearchQuery::new("documentation").with_limit(0);
    assert!(search_pages(seed_pages(), &query).is_empty());
}

#[test]
fn empty_term_matches_everything() {
    let results = search_pages(seed_pages(), &SearchQuery::new("").with_limit(50));
    assert_eq!(results.len(), seed_pages().len());
}

#[test]
fn structured_query_is_matched_literally() {
    // Classification never changes matching, so CQL text only hits pages
    // that literally contain it.
    let results = search_pages(seed_pages(), &SearchQuery::new("space = DEV"));
    assert!(results.is_empty());
}

#[test]
fn fixture_hits_per_term() {
    let cases: [(&str, &[&str]); 7] = [
        ("doc", &["123456789", "987654321"]),
        ("api", &["987654321"]),
        ("q1", &["456789123"]),
        ("review", &["456789123", "246813579"]),
        ("John", &["456789123"]),
        ("users", &["987654321"]),
        ("xyz", &[]),
    ];

    for (term, expected) in cases {
        let results = search_pages(seed_pages(), &SearchQuery::new(term).with_limit(50));
        assert_eq!(ids(&results), expected.to_vec(), "{term}");
    }
}

#[test]
fn predicate_ignores_people_and_url() {
    let page = &seed_pages()[0];
    // creator and url are not searched
    assert!(!matches(page, "john doe"));
    assert!(!matches(page, "atlassian"));
    assert!(matches(page, "overview"));
}

#[test]
fn excerpt_truncates_only_long_pages() {
    let results = search_pages(seed_pages(), &SearchQuery::new("").with_limit(50));

    for (summary, page) in results.iter().zip(seed_pages()) {
        if page.content.chars().count() > EXCERPT_CHARS {
            let head: String = page.content.chars().take(EXCERPT_CHARS).collect();
            assert_eq!(summary.excerpt, format!("{head}..."));
        } else {
            assert_eq!(summary.excerpt, page.content);
        }
    }

    // The guidelines page is the only one over the limit; project docs sit
    // exactly on it.
    assert!(results[4].excerpt.ends_with("..."));
    assert!(!results[0].excerpt.ends_with("..."));
}

#[test]
fn repeated_searches_are_identical() {
    let query = SearchQuery::new("documentation");
    let a = serde_json::to_string_pretty(&search_pages(seed_pages(), &query)).unwrap();
    let b = serde_json::to_string_pretty(&search_pages(seed_pages(), &query)).unwrap();
    assert_eq!(a, b);
}
