//! Integration tests for the prepare command

use predicates::prelude::*;

use crate::helpers::{clippings_cmd, clippings_cmd_with_config, fixture};

#[test]
fn prints_deduplicated_entries() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.arg("prepare")
        .arg(fixture("word_list.txt"))
        .assert()
        .success()
        .stdout("хрущі\nсадок вишневий\nСадок вишневий\nкобзар\n");
}

#[test]
fn reports_progress_on_stderr_when_redirected() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.arg("prepare")
        .arg(fixture("word_list.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Processing 4 unique entries in 1 batches.",
        ))
        .stderr(predicate::str::contains("Done."));
}

#[test]
fn batch_count_follows_config() {
    let (mut cmd, _temp_dir) = clippings_cmd_with_config("[translate]\nbatch_size = 3\n");
    cmd.arg("prepare")
        .arg(fixture("word_list.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("in 2 batches"));
}

#[test]
fn missing_file_reports_open_failure() {
    let (mut cmd, _temp_dir) = clippings_cmd();
    cmd.args(["prepare", "nonexistent.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open nonexistent.txt"));
}
