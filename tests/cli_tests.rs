//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn passage_mem() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passage-mem").unwrap()
}

#[test]
fn blanks_passage_word_by_word() {
    let assert = passage_mem()
        .args(["--seed", "42"])
        .write_stdin("The quick brown fox\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first().copied(), Some("The quick brown fox"));
    assert_eq!(lines.last().copied(), Some("___ _____ _____ ___"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn runs_without_seed() {
    passage_mem()
        .write_stdin("hello there\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hello there\n"))
        .stdout(predicate::str::ends_with("_____ _____\n"));
}

#[test]
fn blank_passage_fails() {
    passage_mem()
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Passage cannot be empty."));
}

#[test]
fn practice_mode_reports_score() {
    passage_mem()
        .args(["--seed", "1", "--practice"])
        .write_stdin("carpe diem\ncarpe diem\ncarpe\ncarpe diem\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Not quite."))
        .stdout(predicate::str::ends_with("Recalled 2 of 3 attempts.\n"));
}

#[test]
fn practice_mode_json_summary() {
    passage_mem()
        .args(["--seed", "1", "--practice", "--json"])
        .write_stdin("carpe diem\ncarpe diem\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""successes":1"#))
        .stdout(predicate::str::contains(r#""words":2"#));
}

#[test]
fn logs_stay_off_stdout() {
    let assert = passage_mem()
        .args(["--seed", "3", "--verbose"])
        .write_stdin("a b\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(
        stdout == "a b\n_ b\n_ _\n" || stdout == "a b\na _\n_ _\n",
        "unexpected stdout: {stdout:?}"
    );
}
