//! Integration tests for the highlights command

use predicates::prelude::*;

use crate::helpers::{clippings_cmd, clippings_cmd_with_config, fixture};

fn run_highlights(args: &[&str]) -> String {
    let (mut cmd, _temp_dir) = clippings_cmd();
    let output = cmd.arg("highlights").args(args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn prints_highlights_from_fixture() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap()]);
    insta::assert_snapshot!("highlights_sample", stdout);
}

#[test]
fn skips_bookmarks_and_notes() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap()]);
    assert!(!stdout.contains("remember this one"));
    assert_eq!(stdout.lines().filter(|l| l.is_empty()).count(), 0);
}

#[test]
fn handles_crlf_input() {
    let path = fixture("crlf_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap()]);
    assert_eq!(stdout, "hello world!\nhello\n");
}

#[test]
fn words_flag_selects_single_words() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "--words"]);
    assert_eq!(stdout, "хрущі\nbaobabs\n");
}

#[test]
fn phrases_flag_selects_phrases() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "-p"]);
    assert_eq!(
        stdout,
        "Садок вишневий коло хати\nWhat is essential is invisible to the eye.\n"
    );
}

#[test]
fn filter_matches_title_case_insensitively() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "-f", "LITTLE PRINCE"]);
    assert_eq!(stdout, "baobabs\nWhat is essential is invisible to the eye.\n");
}

#[test]
fn filter_matches_author() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "--filter", "шевченко", "-w"]);
    assert_eq!(stdout, "хрущі\n");
}

#[test]
fn json_flag_writes_records() {
    let path = fixture("sample_clippings.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "--json", "-w"]);

    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["title_and_author"], "Кобзар (Тарас Шевченко)");
    assert_eq!(records[0]["highlight"], "хрущі");
    assert_eq!(records[0]["highlight_is_phrase"], false);
}

// ============================================================================
// Unknown kinds
// ============================================================================

#[test]
fn unknown_kind_is_skipped_by_default() {
    let path = fixture("unknown_kind.txt");
    let stdout = run_highlights(&[path.to_str().unwrap()]);
    assert_eq!(stdout, "first\nthird\n");
}

#[test]
fn unknown_kind_stop_ends_output() {
    let path = fixture("unknown_kind.txt");
    let stdout = run_highlights(&[path.to_str().unwrap(), "--unknown-kind", "stop"]);
    assert_eq!(stdout, "first\n");
}

#[test]
fn unknown_kind_policy_read_from_config() {
    let path = fixture("unknown_kind.txt");
    let (mut cmd, _temp_dir) = clippings_cmd_with_config("[parser]\nunknown_kind = \"stop\"\n");
    cmd.arg("highlights")
        .arg(&path)
        .assert()
        .success()
        .stdout("first\n");
}

#[test]
fn flag_overrides_config_policy() {
    let path = fixture("unknown_kind.txt");
    let (mut cmd, _temp_dir) = clippings_cmd_with_config("[parser]\nunknown_kind = \"stop\"\n");
    cmd.arg("highlights")
        .arg(&path)
        .args(["--unknown-kind", "continue"])
        .assert()
        .success()
        .stdout("first\nthird\n");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn truncated_file_fails_with_chunk_dump() {
    let path = fixture("truncated_clippings.txt");
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.arg("highlights")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("hello\n")
        .stderr(predicate::str::contains("line 0: 'Book Two (Author)'"))
        .stderr(predicate::str::contains(
            "line 1: '- Your Highlight on page 3 | Location 30-31'",
        ))
        .stderr(predicate::str::contains(
            "No separator found in chunk near line 7",
        ));
}

#[test]
fn missing_file_reports_open_failure() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.args(["highlights", "/some/path/to/missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to open /some/path/to/missing.txt",
        ))
        .stderr(predicate::str::contains("File not found").not());
}

#[test]
fn words_and_phrases_are_mutually_exclusive() {
    let path = fixture("sample_clippings.txt");
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.arg("highlights")
        .arg(&path)
        .args(["-w", "-p"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn no_arguments_shows_usage_error() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.arg("highlights")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn help_describes_flags() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.args(["highlights", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--words"))
        .stdout(predicate::str::contains("--phrases"));
}
