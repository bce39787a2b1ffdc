//! CLI Integration Tests
//!
//! Run the `techblog` binary end-to-end against temporary config and
//! content files.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const SITE_TOML: &str = r#"
[metadata]
title = "Jane Blog"
author = "Jane Doe"

[metadata.social]
twitter = "jd_tweets"
github = "janedoe"
"#;

fn cli_cmd() -> Command {
    Command::cargo_bin("techblog").expect("Failed to find techblog binary")
}

/// Command with a site.toml written into `dir`
fn cli_with_config(dir: &TempDir) -> Command {
    let config = dir.path().join("site.toml");
    fs::write(&config, SITE_TOML).unwrap();
    let mut cmd = cli_cmd();
    cmd.arg("--config").arg(config);
    cmd
}

// ============================================================================
// Page Command Tests
// ============================================================================

#[test]
fn test_page_home_renders_large_header() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .args(["page", "--path", "/", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1"))
        .stdout(predicate::str::contains(">Jane Blog</a>"))
        .stdout(predicate::str::contains("\u{a0}2024\u{a0}"));
}

#[test]
fn test_page_inner_renders_small_header() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .args(["page", "--path", "/posts/hello/", "--title", "Elsewhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3"))
        .stdout(predicate::str::contains("<h1").not())
        .stdout(predicate::str::contains(">Elsewhere</a>"));
}

#[test]
fn test_page_includes_markdown_content() {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("post.md");
    fs::write(&content, "## Hi there\n\nA *short* post.").unwrap();

    cli_with_config(&dir)
        .args(["page", "--path", "/posts/hi/", "--content"])
        .arg(&content)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Hi there</h2>"))
        .stdout(predicate::str::contains("<em>short</em>"));
}

#[test]
fn test_page_with_bio() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .args(["page", "--path", "/", "--bio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("href=\"https://github.com/janedoe\""));
}

#[test]
fn test_page_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("index.html");

    cli_with_config(&dir)
        .args(["page", "--path", "/", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote page to"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<footer"));
}

#[test]
fn test_page_missing_content_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .args(["page", "--path", "/", "--content", "/no/such/post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_page_requires_path() {
    cli_cmd().arg("page").assert().failure();
}

// ============================================================================
// Bio Command Tests
// ============================================================================

#[test]
fn test_bio_uses_config_metadata() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .arg("bio")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("https://twitter.com/jd_tweets"));
}

#[test]
fn test_bio_static_ignores_metadata() {
    let dir = TempDir::new().unwrap();

    cli_with_config(&dir)
        .args(["bio", "--static"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe").not())
        .stdout(predicate::str::contains("https://github.com/handeyeco"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    cli_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[metadata]"))
        .stdout(predicate::str::contains("scale_ratio"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("site.toml");
    fs::write(&config, "[metadata]\nauthor = \"\"\n[metadata.social]\ntwitter = \"a\"\ngithub = \"b\"\n").unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
