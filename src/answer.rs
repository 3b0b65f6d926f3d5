//! The query handler: matches a question against the corpus store and
//! composes a bounded answer with citation links.
//!
//! Matching is case-insensitive substring containment, nothing more. There
//! is no scoring among matches: the first `max_posts` posts and `max_pages`
//! pages in corpus scan order win, and the composed answer cites them in
//! that same order (post links before page links).

use thiserror::Error;

use crate::config::AnswerConfig;
use crate::models::{Answer, ForumPost, Link};
use crate::store::CorpusStore;

/// Header line opening the forum-post section of an answer.
pub const DISCOURSE_HEADER: &str = "Here’s what I found on Discourse:";

/// Header line opening the course-material section of an answer.
pub const COURSE_HEADER: &str = "Here’s what I found in course material:";

/// Failure outcome of [`answer_question`].
///
/// A question that matches nothing is an expected, frequent result, so it is
/// a value, not a server fault. The HTTP layer maps it to a 404.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("No relevant answer found.")]
    NoMatch,
}

/// Answers a question from the corpus store.
///
/// The question is lowercased once, then both corpora are scanned in stored
/// order. The composed text holds a Discourse section (post snippets
/// truncated to `snippet_chars` characters) and a course-material section
/// ("Matched in:" lines), separated by a blank line when both are present.
pub fn answer_question(
    store: &CorpusStore,
    config: &AnswerConfig,
    question: &str,
) -> Result<Answer, AnswerError> {
    let needle = question.to_lowercase();

    let matched_posts: Vec<&ForumPost> = store
        .posts()
        .iter()
        .filter(|post| post_matches(post, &needle))
        .take(config.max_posts)
        .collect();

    let matched_pages: Vec<_> = store
        .pages()
        .iter()
        .filter(|page| page.body.to_lowercase().contains(&needle))
        .take(config.max_pages)
        .collect();

    let mut lines = Vec::new();
    let mut links = Vec::new();

    if !matched_posts.is_empty() {
        lines.push(DISCOURSE_HEADER.to_string());
        for post in matched_posts {
            lines.push(truncate_chars(&post.content, config.snippet_chars).to_string());
            links.push(Link {
                url: post.url.clone(),
                text: post.topic_title.clone().unwrap_or_default(),
            });
        }
    }

    if !matched_pages.is_empty() {
        // The leading newline becomes the blank separator line on join.
        lines.push(format!("\n{COURSE_HEADER}"));
        for page in matched_pages {
            lines.push(format!("Matched in: {}", page.path));
            links.push(Link {
                url: config.page_base_url.clone(),
                text: page.path.clone(),
            });
        }
    }

    if lines.is_empty() {
        return Err(AnswerError::NoMatch);
    }

    Ok(Answer {
        answer: lines.join("\n"),
        links,
    })
}

fn post_matches(post: &ForumPost, needle: &str) -> bool {
    if post.content.to_lowercase().contains(needle) {
        return true;
    }
    post.topic_title
        .as_deref()
        .is_some_and(|title| title.to_lowercase().contains(needle))
}

/// Truncates to at most `max_chars` characters, never splitting a character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
