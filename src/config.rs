use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub answer: AnswerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    /// Bulk JSON file holding the array of forum posts.
    pub posts_path: PathBuf,
    /// Directory of course page files, one document per file.
    pub pages_dir: PathBuf,
    /// Glob patterns (relative to `pages_dir`) selecting which files become
    /// page documents.
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

/// Answer-composition knobs: two posts, two pages, 200-character snippets
/// unless overridden.
#[derive(Debug, Deserialize, Clone)]
pub struct AnswerConfig {
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
    /// URL every course-page link points at.
    #[serde(default = "default_page_base_url")]
    pub page_base_url: String,
    /// Questions longer than this (in characters) are rejected at the HTTP
    /// boundary before matching runs.
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            max_posts: default_max_posts(),
            max_pages: default_max_pages(),
            snippet_chars: default_snippet_chars(),
            page_base_url: default_page_base_url(),
            max_question_chars: default_max_question_chars(),
        }
    }
}

fn default_max_posts() -> usize {
    2
}
fn default_max_pages() -> usize {
    2
}
fn default_snippet_chars() -> usize {
    200
}
fn default_page_base_url() -> String {
    "https://tds.s-anand.net/#/".to_string()
}
fn default_max_question_chars() -> usize {
    2048
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.corpus.include_globs.is_empty() {
        anyhow::bail!("corpus.include_globs must not be empty");
    }

    if config.answer.max_posts == 0 {
        anyhow::bail!("answer.max_posts must be >= 1");
    }
    if config.answer.max_pages == 0 {
        anyhow::bail!("answer.max_pages must be >= 1");
    }
    if config.answer.snippet_chars == 0 {
        anyhow::bail!("answer.snippet_chars must be >= 1");
    }
    if config.answer.max_question_chars == 0 {
        anyhow::bail!("answer.max_question_chars must be >= 1");
    }
    if config.answer.page_base_url.is_empty() {
        anyhow::bail!("answer.page_base_url must not be empty");
    }

    Ok(config)
}
