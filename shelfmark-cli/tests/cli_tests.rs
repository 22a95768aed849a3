//! Integration tests for the Shelfmark CLI
//!
//! Each test runs the binary against its own temporary data directory, so
//! every invocation exercises the real file-backed store across process
//! boundaries.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the CLI against the given data directory
fn shelfmark(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelfmark-cli").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Write a seed document into the default location inside the data dir
fn write_seed(data_dir: &TempDir, content: &str) {
    fs::create_dir_all(data_dir.path()).unwrap();
    fs::write(data_dir.path().join("seed.json"), content).unwrap();
}

const SEED: &str = r#"{
    "categories": [
        {"id": "10001", "name": "Fiction"},
        {"id": "10002", "name": "Classics"}
    ],
    "tags": [
        {"id": "20002", "name": "Favorites"}
    ]
}"#;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("shelfmark-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("category"))
        .stdout(predicate::str::contains("tag"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("shelfmark-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelfmark"));
}

#[test]
fn test_first_run_fetches_starter_books() {
    let data_dir = TempDir::new().unwrap();

    // No seed file: the missing seed is a notification, not an error, and
    // the starter books still load
    shelfmark(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("Dune"))
        .stderr(predicate::str::contains("note:"));
}

#[test]
fn test_seed_document_populates_labels() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fiction"))
        .stdout(predicate::str::contains("Classics"));

    shelfmark(&data_dir)
        .args(["tag", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorites"));
}

#[test]
fn test_add_book_persists_across_invocations() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args([
            "add",
            "--title",
            "Emma",
            "--author",
            "Jane Austen",
            "--genre",
            "Romance",
            "--rating",
            "4",
            "--category",
            "Fiction",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book"));

    // A separate process sees the committed state with resolved names
    shelfmark(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Fiction"));
}

#[test]
fn test_rating_is_clamped_at_the_boundary() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args([
            "add", "--title", "Dune", "--author", "Herbert", "--genre", "Sci-Fi", "--rating", "9",
        ])
        .assert()
        .success();

    shelfmark(&data_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rating\": 5.0"));
}

#[test]
fn test_blank_title_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args([
            "add", "--title", "  ", "--author", "Herbert", "--genre", "Sci-Fi",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_duplicate_category_rejected_but_tag_with_same_name_accepted() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args(["category", "add", "Fiction"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Same name in the other collection is allowed
    shelfmark(&data_dir)
        .args(["tag", "add", "Fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added tag 'Fiction'"));
}

#[test]
fn test_delete_category_in_use_is_refused() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args([
            "add",
            "--title",
            "Emma",
            "--author",
            "Jane Austen",
            "--genre",
            "Romance",
            "--category",
            "Classics",
        ])
        .assert()
        .success();

    shelfmark(&data_dir)
        .args(["category", "delete", "Classics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still used"));

    // Still present after the refusal
    shelfmark(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classics"));

    // Detach the book (id 4: three starter books come first), then delete
    shelfmark(&data_dir)
        .args(["edit", "4", "--clear-categories"])
        .assert()
        .success();

    shelfmark(&data_dir)
        .args(["category", "delete", "Classics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category 'Classics'"));
}

#[test]
fn test_edit_and_delete_book() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args(["edit", "1", "--rating", "3.5", "--tag", "Favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated book 1"));

    shelfmark(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorites"));

    shelfmark(&data_dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted book 2"));

    shelfmark(&data_dir)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unknown_label_name_is_reported() {
    let data_dir = TempDir::new().unwrap();
    write_seed(&data_dir, SEED);

    shelfmark(&data_dir)
        .args([
            "add", "--title", "Emma", "--author", "Austen", "--genre", "Romance", "--category",
            "Nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'Nope'"));
}
