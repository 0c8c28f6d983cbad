//! Domain models for the page store.
//!
//! Serialized field names follow the Confluence REST shape (camelCase), and
//! field order is significant: tool payloads are rendered straight from these
//! structs.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a search excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Suffix appended to an excerpt when the content was cut.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// A logical collection of pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Space {
    pub key: String,
    pub name: String,
}

/// Author or last editor of a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: String,
}

/// A wiki page as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub space: Space,
    pub url: String,
    pub content: String,
    pub created: String,
    pub creator: Person,
    pub last_modified: String,
    pub last_modifier: Person,
    pub version: u32,
    pub labels: Vec<String>,
}

impl Page {
    /// Projection used by the `search` tool.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            space: self.space.clone(),
            url: self.url.clone(),
            excerpt: excerpt(&self.content),
            created: self.created.clone(),
            creator: self.creator.clone(),
            last_modified: self.last_modified.clone(),
            last_modifier: self.last_modifier.clone(),
            version: self.version,
            labels: self.labels.clone(),
        }
    }

    /// Everything but the body, used by the `get_page` tool.
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            id: self.id.clone(),
            title: self.title.clone(),
            space: self.space.clone(),
            url: self.url.clone(),
            created: self.created.clone(),
            creator: self.creator.clone(),
            last_modified: self.last_modified.clone(),
            last_modifier: self.last_modifier.clone(),
            version: self.version,
            labels: self.labels.clone(),
        }
    }
}

/// Search result record: a page with its body replaced by an excerpt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub space: Space,
    pub url: String,
    pub excerpt: String,
    pub created: String,
    pub creator: Person,
    pub last_modified: String,
    pub last_modifier: Person,
    pub version: u32,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub id: String,
    pub title: String,
    pub space: Space,
    pub url: String,
    pub created: String,
    pub creator: Person,
    pub last_modified: String,
    pub last_modifier: Person,
    pub version: u32,
    pub labels: Vec<String>,
}

/// `get_page` payload on a hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContent {
    pub metadata: PageMetadata,
    pub content: String,
}

impl From<&Page> for PageContent {
    fn from(page: &Page) -> Self {
        Self {
            metadata: page.metadata(),
            content: page.content.clone(),
        }
    }
}

/// Truncates `content` to [`EXCERPT_CHARS`] characters.
///
/// Counts chars rather than bytes so multi-byte text is never split.
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], EXCERPT_ELLIPSIS),
        None => content.to_string(),
    }
}
