use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn tutorbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tutorbook").unwrap();
    cmd.arg("--data-dir").arg(data_dir).env_remove("RUST_LOG");
    cmd
}

fn add_amy(data_dir: &Path) {
    tutorbook(data_dir)
        .args([
            "add",
            "student",
            "n/Amy",
            "p/94351253",
            "e/amy@example.com",
            "a/123, Jurong West Ave 6",
            "s/Mon 1500-1700",
            "c/50",
            "nt/Likes to swim.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New person added: Amy"));
}

#[test]
fn test_note_added_and_removed() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    tutorbook(temp_dir.path())
        .args(["note", "1", "nt/Needs", "help", "with", "algebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Note to Person: Amy"));

    tutorbook(temp_dir.path())
        .args(["note", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Note from Person: Amy"));
}

#[test]
fn test_note_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    tutorbook(temp_dir.path())
        .args(["note", "1", "nt/Prefers mornings"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(temp_dir.path().join("addressbook.json")).unwrap();
    assert!(saved.contains("Prefers mornings"));

    tutorbook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed all persons"))
        .stdout(predicate::str::contains("Amy"));
}

#[test]
fn test_invalid_index_fails_without_saving() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());
    let before = std::fs::read_to_string(temp_dir.path().join("addressbook.json")).unwrap();

    tutorbook(temp_dir.path())
        .args(["note", "5", "nt/Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The person index provided is invalid"));

    let after = std::fs::read_to_string(temp_dir.path().join("addressbook.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_bad_index_shows_usage() {
    let temp_dir = tempfile::tempdir().unwrap();

    tutorbook(temp_dir.path())
        .args(["note", "abc", "nt/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid command format!"))
        .stderr(predicate::str::contains("note:"));
}

#[test]
fn test_unknown_command() {
    let temp_dir = tempfile::tempdir().unwrap();

    tutorbook(temp_dir.path())
        .arg("teleport")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn test_interactive_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_amy(temp_dir.path());

    tutorbook(temp_dir.path())
        .write_stdin("note 9 nt/x\nnote 1 nt/Bring goggles\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("The person index provided is invalid"))
        .stdout(predicate::str::contains("Added Note to Person: Amy"))
        .stdout(predicate::str::contains("Exiting address book as requested"))
        .stdout(predicate::str::contains("Bring goggles"));
}

#[test]
fn test_interactive_session_ends_on_eof() {
    let temp_dir = tempfile::tempdir().unwrap();

    tutorbook(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No persons found."));
}
