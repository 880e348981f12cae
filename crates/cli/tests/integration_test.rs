//! End-to-end tests for the `zipf` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn zipf() -> Command {
    Command::cargo_bin("zipf").expect("binary builds")
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn count_produces_ranked_percentage_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "book.txt", "The cat sat.\nThe CAT ran!\n");
    let output = dir.path().join("book.dat");

    zipf()
        .arg("count")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "cat 2 33.333333\nthe 2 33.333333\nran 1 16.666667\nsat 1 16.666667\n"
    );
}

#[test]
fn count_min_length_filters_before_normalizing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "book.txt", "aa bbb aa cccc\n");
    let output = dir.path().join("book.dat");

    zipf()
        .arg("count")
        .arg(&input)
        .arg(&output)
        .arg("3")
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "bbb 1 50.000000\ncccc 1 50.000000\n");
}

#[test]
fn count_that_filters_everything_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "book.txt", "The cat sat. The CAT ran!\n");
    let output = dir.path().join("book.dat");

    zipf()
        .arg("count")
        .arg(&input)
        .arg(&output)
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("total word count is zero"));

    assert!(!output.exists());
}

#[test]
fn count_missing_input_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("book.dat");

    zipf()
        .arg("count")
        .arg("no-such-book.txt")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-book.txt"));
}

#[test]
fn plot_ascii_prints_labelled_bars() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "book.dat", "the 4 66.666667\ncat 2 33.333333\n");

    zipf()
        .arg("plot")
        .arg(&counts)
        .arg("ascii")
        .assert()
        .success()
        .stdout(predicate::str::contains("the  #").and(predicate::str::contains("cat  #")));
}

#[test]
fn plot_limit_caps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "book.dat", "a 3 50.0\nb 2 33.3\nc 1 16.7\n");

    let assert = zipf()
        .arg("plot")
        .arg(&counts)
        .arg("show")
        .arg("2")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn plot_other_target_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "book.dat", "the 4 66.666667\ncat 2 33.333333\n");
    let target = dir.path().join("chart.txt");

    zipf()
        .arg("plot")
        .arg(&counts)
        .arg(&target)
        .assert()
        .success();

    let rendered = fs::read_to_string(&target).unwrap();
    assert!(rendered.starts_with("the  #"));
}

#[test]
fn plot_skips_comment_lines() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "book.dat", "# header\nthe 4 66.666667\n# note\ncat 2 33.333333\n");

    let assert = zipf().arg("plot").arg(&counts).arg("ascii").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn plot_malformed_counts_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "book.dat", "the 4 66.666667\nbroken 2\n");

    zipf()
        .arg("plot")
        .arg(&counts)
        .arg("ascii")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2").and(predicate::str::contains("broken 2")));
}

#[test]
fn ratio_prints_header_and_two_decimal_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "dracula.dat", "the 100 40.0\nand 50 20.0\n");

    zipf()
        .arg("ratio")
        .arg(&counts)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Book\tFirst\tSecond\tRatio")
                .and(predicate::str::contains("dracula\t100\t50\t2.00")),
        );
}

#[test]
fn ratio_with_one_entry_fails_explicitly() {
    let dir = tempfile::tempdir().unwrap();
    let counts = write(&dir, "short.dat", "only 1 100.0\n");

    zipf()
        .arg("ratio")
        .arg(&counts)
        .assert()
        .failure()
        .stderr(predicate::str::contains("need at least 2"));
}

#[test]
fn count_then_plot_then_ratio_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "book.txt", "the the the the and and a\n");
    let counts = dir.path().join("book.dat");

    zipf().arg("count").arg(&input).arg(&counts).assert().success();

    zipf()
        .arg("plot")
        .arg(&counts)
        .arg("ascii")
        .assert()
        .success()
        .stdout(predicate::str::contains("the"));

    zipf()
        .arg("ratio")
        .arg(&counts)
        .assert()
        .success()
        .stdout(predicate::str::contains("book\t4\t2\t2.00"));
}
