//! Seeded in-memory page store.

use std::sync::{Arc, LazyLock};

use super::models::{Page, Person, Space};
use super::repository::PageRepository;

static SEED: LazyLock<Arc<[Page]>> = LazyLock::new(|| build_seed().into());

/// The process-wide seed pages, built on first access.
pub fn seed_pages() -> &'static [Page] {
    &SEED
}

/// Immutable page store.
///
/// Cloning is cheap: the pages sit behind an `Arc` and are never mutated.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    pages: Arc<[Page]>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl FixtureStore {
    /// Store backed by the shared seed pages.
    pub fn seeded() -> Self {
        Self {
            pages: Arc::clone(&SEED),
        }
    }

    /// Store over an arbitrary page list.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            pages: pages.into(),
        }
    }
}

impl PageRepository for FixtureStore {
    fn pages(&self) -> &[Page] {
        &self.pages
    }
}

fn space(key: &str, name: &str) -> Space {
    Space {
        key: key.to_string(),
        name: name.to_string(),
    }
}

fn person(name: &str, email: &str) -> Person {
    Person {
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|label| label.to_string()).collect()
}

fn build_seed() -> Vec<Page> {
    let john = person("John Doe", "john.doe@example.com");
    let jane = person("Jane Smith", "jane.smith@example.com");
    let bob = person("Bob Johnson", "bob.johnson@example.com");
    let alice = person("Alice Williams", "alice.williams@example.com");
    let dev = space("DEV", "Development");

    vec![
        Page {
            id: "123456789".to_string(),
            title: "Project Documentation".to_string(),
            space: dev.clone(),
            url: "https://example.atlassian.net/wiki/spaces/DEV/pages/123456789/Project+Documentation"
                .to_string(),
            content: "# Project Documentation\n\nThis is the main documentation for our project.\n\n## Overview\n\nThe project aims to solve X problem by implementing Y solution."
                .to_string(),
            created: "2023-01-15T10:30:45.000Z".to_string(),
            creator: john.clone(),
            last_modified: "2023-04-20T14:22:33.000Z".to_string(),
            last_modifier: jane.clone(),
            version: 5,
            labels: labels(&["documentation", "project", "overview"]),
        },
        Page {
            id: "987654321".to_string(),
            title: "API Reference".to_string(),
            space: dev.clone(),
            url: "https://example.atlassian.net/wiki/spaces/DEV/pages/987654321/API+Reference"
                .to_string(),
            content: "# API Reference\n\n## Endpoints\n\n### GET /api/v1/users\n\nReturns a list of all users.\n\n### POST /api/v1/users\n\nCreates a new user."
                .to_string(),
            created: "2023-02-10T09:15:30.000Z".to_string(),
            creator: jane.clone(),
            last_modified: "2023-04-18T11:45:22.000Z".to_string(),
            last_modifier: jane,
            version: 3,
            labels: labels(&["api", "reference", "documentation"]),
        },
        Page {
            id: "456789123".to_string(),
            title: "Meeting Notes - Q1 Review".to_string(),
            space: space("TEAM", "Team Space"),
            url: "https://example.atlassian.net/wiki/spaces/TEAM/pages/456789123/Meeting+Notes+-+Q1+Review"
                .to_string(),
            content: "# Q1 Review Meeting\n\n**Date**: 2023-03-31\n**Attendees**: John, Jane, Bob, Alice\n\n## Agenda\n\n1. Q1 Results\n2. Q2 Planning\n3. Open Issues"
                .to_string(),
            created: "2023-03-31T15:00:00.000Z".to_string(),
            creator: bob.clone(),
            last_modified: "2023-03-31T17:30:45.000Z".to_string(),
            last_modifier: bob.clone(),
            version: 1,
            labels: labels(&["meeting", "review", "q1"]),
        },
        Page {
            id: "135792468".to_string(),
            title: "Product Roadmap".to_string(),
            space: space("PROD", "Product"),
            url: "https://example.atlassian.net/wiki/spaces/PROD/pages/135792468/Product+Roadmap"
                .to_string(),
            content: "# Product Roadmap\n\n## Q2 2023\n\n- Feature A implementation\n- Bug fixes for module B\n\n## Q3 2023\n\n- New UI design\n- Performance improvements"
                .to_string(),
            created: "2023-01-05T11:20:15.000Z".to_string(),
            creator: alice,
            last_modified: "2023-04-10T09:45:30.000Z".to_string(),
            last_modifier: john.clone(),
            version: 8,
            labels: labels(&["roadmap", "planning", "product"]),
        },
        Page {
            id: "246813579".to_string(),
            title: "Development Guidelines".to_string(),
            space: dev,
            url: "https://example.atlassian.net/wiki/spaces/DEV/pages/246813579/Development+Guidelines"
                .to_string(),
            content: "# Development Guidelines\n\n## Coding Standards\n\n- Use PEP 8 for Python code\n- Use ESLint for JavaScript code\n\n## Git Workflow\n\n1. Create feature branch\n2. Implement changes\n3. Submit PR for review"
                .to_string(),
            created: "2023-02-20T13:40:25.000Z".to_string(),
            creator: john,
            last_modified: "2023-04-15T10:35:20.000Z".to_string(),
            last_modifier: bob,
            version: 4,
            labels: labels(&["guidelines", "development", "standards"]),
        },
    ]
}
