use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup(document: &str, words: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("doc.txt"), document).unwrap();
    fs::write(dir.path().join("words.txt"), words).unwrap();
    dir
}

fn wordcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wordcheck").unwrap();
    cmd.current_dir(dir).arg("--no-color");
    cmd
}

#[test]
fn test_clean_document_exits_zero() {
    let dir = setup("The quick brown fox\n", "the\nquick\nbrown\nfox\n");

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_misspelling_reported_with_line_number() {
    let dir = setup(
        "the quick brown fox\nThe quick, brown fox jumps!\n",
        "the\nquick\nbrown\nfox\n",
    );

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .assert()
        .code(1)
        .stdout("Line Number: 2 - The quick, brown fox jumps!\njumps\n\n");
}

#[test]
fn test_trailing_word_without_newline() {
    let dir = setup("fox jumps", "fox\n");

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("jumps"));
}

#[test]
fn test_missing_document_is_io_error() {
    let dir = setup("", "word\n");

    wordcheck(dir.path())
        .args(["missing.txt", "words.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_missing_dictionary_is_io_error() {
    let dir = setup("hello\n", "");

    wordcheck(dir.path())
        .args(["doc.txt", "nowhere.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nowhere.txt"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    wordcheck(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<DOCUMENT>"));
}

#[test]
fn test_completion_script_needs_no_document() {
    let dir = tempfile::tempdir().unwrap();

    wordcheck(dir.path())
        .args(["--completion", "bash"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("wordcheck"));
}

#[test]
fn test_word_list_with_latin1_bytes_still_loads() {
    let dir = setup("apple banana\n", "");
    fs::write(dir.path().join("words.txt"), b"apple\ncaf\xe9\nbanana\n").unwrap();

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .assert()
        .code(0);
}

#[test]
fn test_json_output() {
    let dir = setup("all good\nbad wrod\n", "all\ngood\nbad\n");

    let assert = wordcheck(dir.path())
        .args(["doc.txt", "words.txt", "--format", "json"])
        .assert()
        .code(1);

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["lines_checked"], 2);
    assert_eq!(value["total_findings"], 1);
    assert_eq!(value["findings"][0]["word"], "wrod");
    assert_eq!(value["findings"][0]["line"], 2);
}

#[test]
fn test_parallel_output_matches_sequential() {
    let document = "one two\nthree foor\n\nfive sx seven\n";
    let dir = setup(document, "one\ntwo\nthree\nfive\nseven\n");

    let sequential = wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .output()
        .unwrap();
    let parallel = wordcheck(dir.path())
        .args(["doc.txt", "words.txt", "--parallel"])
        .output()
        .unwrap();

    assert_eq!(sequential.status.code(), Some(1));
    assert_eq!(parallel.status.code(), Some(1));
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_local_config_supplies_dictionary() {
    let dir = setup("don't panic\n", "don't\npanic\n");
    fs::write(dir.path().join(".wordcheck.toml"), "dictionary = \"words.txt\"\n").unwrap();

    wordcheck(dir.path()).arg("doc.txt").assert().code(0);
}

#[test]
fn test_summary_goes_to_stderr() {
    let dir = setup("teh end\n", "the\nend\n");

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt", "--summary"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ 1 misspelling on 1 line"));
}

#[test]
fn test_empty_word_list_warns_and_reports_everything() {
    let dir = setup("hello\n", "");

    wordcheck(dir.path())
        .args(["doc.txt", "words.txt"])
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stdout("Line Number: 1 - hello\nhello\n\n")
        .stderr(predicate::str::contains("Dictionary is empty"));
}
