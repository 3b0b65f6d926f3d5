//! Core data models used throughout the virtual TA.
//!
//! These types represent the loaded corpora and the composed answers that
//! flow from the query handler out to the HTTP and CLI surfaces.

use serde::{Deserialize, Serialize};

/// A single Discourse-style forum post from the bulk post file.
///
/// Unknown fields in the source JSON are ignored; a missing or `null`
/// `topic_title` becomes `None` and never contributes a title match.
#[derive(Debug, Clone, Deserialize)]
pub struct ForumPost {
    pub content: String,
    #[serde(default)]
    pub topic_title: Option<String>,
    pub url: String,
}

/// A course page loaded from the pages directory.
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// Path relative to the pages directory, used as the page's key.
    pub path: String,
    pub body: String,
}

/// A citation link attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    /// Display label. Empty when the matched post carries no title.
    pub text: String,
}

/// A composed answer: the joined answer text plus its citation links,
/// post links first, page links second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub links: Vec<Link>,
}
