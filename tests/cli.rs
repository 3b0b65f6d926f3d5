use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn vta_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("vta");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    fs::write(
        root.join("discourse_posts.json"),
        r#"[
            {
                "content": "Docker networking is tricky when containers span hosts",
                "topic_title": "Networking",
                "url": "https://discourse.example/t/1"
            },
            {
                "content": "Use pandas read_csv for large files",
                "topic_title": null,
                "url": "https://discourse.example/t/2"
            }
        ]"#,
    )
    .unwrap();

    let pages_dir = root.join("tds_pages_md");
    fs::create_dir_all(&pages_dir).unwrap();
    fs::write(
        pages_dir.join("intro.md"),
        "# Intro\n\nWelcome to Tools in Data Science.",
    )
    .unwrap();
    fs::write(
        pages_dir.join("docker.md"),
        "# Docker\n\nDocker and containers are covered in week 3.",
    )
    .unwrap();

    let config_content = format!(
        r#"[corpus]
posts_path = "{}/discourse_posts.json"
pages_dir = "{}/tds_pages_md"

[server]
bind = "127.0.0.1:0"
"#,
        root.display(),
        root.display()
    );

    let config_path = config_dir.join("vta.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_vta(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = vta_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run vta binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_sources_lists_both_corpora() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_vta(&config_path, &["sources"]);
    assert!(
        success,
        "sources failed: stdout={}, stderr={}",
        stdout, stderr
    );
    assert!(stdout.contains("discourse_posts.json"));
    assert!(stdout.contains("2 posts"));
    assert!(stdout.contains("tds_pages_md"));
    assert!(stdout.contains("2 pages"));
    assert!(stdout.contains("OK"));
}

#[test]
fn test_ask_matches_post_and_page() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_vta(&config_path, &["ask", "docker"]);
    assert!(success, "ask failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("what I found on Discourse:"));
    assert!(stdout.contains("Docker networking is tricky"));
    assert!(stdout.contains("what I found in course material:"));
    assert!(stdout.contains("Matched in: docker.md"));
    assert!(stdout.contains("https://discourse.example/t/1"));
    assert!(stdout.contains("https://tds.s-anand.net/#/"));
}

#[test]
fn test_ask_is_case_insensitive() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_vta(&config_path, &["ask", "DOCKER"]);
    assert!(success);
    assert!(stdout.contains("Docker networking is tricky"));
}

#[test]
fn test_ask_no_match_prints_not_found() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_vta(&config_path, &["ask", "quantum chromodynamics"]);
    assert!(success, "A miss is not a process failure");
    assert!(stdout.contains("No relevant answer found."));
}

#[test]
fn test_missing_posts_file_aborts_startup() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_file(tmp.path().join("discourse_posts.json")).unwrap();

    let (_, stderr, success) = run_vta(&config_path, &["sources"]);
    assert!(!success, "Missing post file should be fatal");
    assert!(
        stderr.contains("Failed to read forum post file"),
        "Should name the missing source, got: {}",
        stderr
    );
}

#[test]
fn test_missing_pages_dir_aborts_startup() {
    let (tmp, config_path) = setup_test_env();
    fs::remove_dir_all(tmp.path().join("tds_pages_md")).unwrap();

    let (_, stderr, success) = run_vta(&config_path, &["sources"]);
    assert!(!success, "Missing page directory should be fatal");
    assert!(
        stderr.contains("Course page directory does not exist"),
        "Should name the missing source, got: {}",
        stderr
    );
}

#[test]
fn test_malformed_posts_file_aborts_startup() {
    let (tmp, config_path) = setup_test_env();
    fs::write(tmp.path().join("discourse_posts.json"), "not json").unwrap();

    let (_, stderr, success) = run_vta(&config_path, &["sources"]);
    assert!(!success, "Malformed post file should be fatal");
    assert!(
        stderr.contains("Failed to parse forum post file"),
        "Should report the parse failure, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_answer_config_rejected() {
    let (_tmp, config_path) = setup_test_env();
    let mut content = fs::read_to_string(&config_path).unwrap();
    content.push_str("\n[answer]\nmax_posts = 0\n");
    fs::write(&config_path, content).unwrap();

    let (_, stderr, success) = run_vta(&config_path, &["sources"]);
    assert!(!success, "Zero max_posts should be rejected");
    assert!(
        stderr.contains("max_posts"),
        "Should name the invalid field, got: {}",
        stderr
    );
}
