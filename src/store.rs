//! The corpus store: read-only collections of forum posts and course pages.
//!
//! Both collections are loaded exactly once at process startup and never
//! mutated afterwards. A missing or malformed source is fatal: the service
//! must not start serving without its corpus.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::{ForumPost, PageDocument};

/// Immutable snapshot of both corpora, shared across request handlers.
#[derive(Debug)]
pub struct CorpusStore {
    posts: Vec<ForumPost>,
    pages: Vec<PageDocument>,
}

impl CorpusStore {
    /// Loads both corpora from the configured sources.
    ///
    /// Posts keep the order of the bulk file; pages are sorted by relative
    /// path so scan order is deterministic across runs.
    pub fn load(config: &Config) -> Result<Self> {
        let posts = load_posts(&config.corpus.posts_path)?;
        let pages = load_pages(&config.corpus.pages_dir, &config.corpus.include_globs)?;

        info!(
            posts = posts.len(),
            pages = pages.len(),
            "corpus loaded"
        );

        Ok(Self { posts, pages })
    }

    /// Builds a store directly from in-memory collections. Pages are sorted
    /// by path, matching [`CorpusStore::load`].
    pub fn from_parts(posts: Vec<ForumPost>, mut pages: Vec<PageDocument>) -> Self {
        pages.sort_by(|a, b| a.path.cmp(&b.path));
        Self { posts, pages }
    }

    /// Forum posts in bulk-file order.
    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    /// Course pages in sorted path order.
    pub fn pages(&self) -> &[PageDocument] {
        &self.pages
    }
}

fn load_posts(path: &Path) -> Result<Vec<ForumPost>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read forum post file: {}", path.display()))?;

    let posts: Vec<ForumPost> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse forum post file: {}", path.display()))?;

    Ok(posts)
}

fn load_pages(dir: &Path, include_globs: &[String]) -> Result<Vec<PageDocument>> {
    if !dir.is_dir() {
        bail!("Course page directory does not exist: {}", dir.display());
    }

    let include_set = build_globset(include_globs)?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(dir).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if !include_set.is_match(&rel_str) {
            continue;
        }

        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read course page: {}", path.display()))?;

        pages.push(PageDocument {
            path: rel_str,
            body,
        });
    }

    // Sort for deterministic ordering
    pages.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(pages)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
