//! End-to-end tests running the `todo` binary against a scratch task file

use assert_cmd::Command;
use predicates::prelude::*;
use test_utils::TestStore;

#[allow(deprecated)]
fn todo(store: &TestStore) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.arg("--file")
        .arg(store.path())
        .env_remove("TODO_FILE")
        .env_remove("RUST_LOG")
        .env_remove("APP_ENV");
    cmd
}

#[allow(deprecated)]
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_full_session_persists_between_runs() {
    let store = TestStore::new();

    todo(&store)
        .args(["add", "Buy milk", "--priority", "high", "--tags", "shopping"])
        .assert()
        .success()
        .stdout("Added task #1: Buy milk\n");

    todo(&store)
        .args(["add", "Study"])
        .assert()
        .success()
        .stdout("Added task #2: Study\n");

    todo(&store)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout("Marked task #1 as done.\n");

    todo(&store)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout("Deleted task #2.\n");

    todo(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[x] #1 Buy milk (high) [shopping] created ",
        ));

    todo(&store)
        .arg("stats")
        .assert()
        .success()
        .stdout("Total: 1, Completed: 1, Pending: 0, Completion Rate: 100%\n");

    todo(&store)
        .args(["add", "Next"])
        .assert()
        .success()
        .stdout("Added task #3: Next\n");
}

#[test]
fn test_list_filters() {
    let store = TestStore::new();
    todo(&store)
        .args(["add", "Report", "-t", "Work,urgent"])
        .assert()
        .success();
    todo(&store)
        .args(["add", "Gym", "-t", "personal"])
        .assert()
        .success();
    todo(&store).args(["done", "2"]).assert().success();

    todo(&store)
        .args(["list", "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Report"))
        .stdout(predicate::str::contains("Gym").not());

    todo(&store)
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] #2 Gym"))
        .stdout(predicate::str::contains("Report").not());

    todo(&store)
        .args(["list", "--pending", "--tag", "personal"])
        .assert()
        .success()
        .stdout("No tasks found.\n");
}

#[test]
fn test_empty_description_is_reported() {
    let store = TestStore::new();

    todo(&store)
        .args(["add", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Task description cannot be empty"));

    assert!(!store.path().exists());
}

#[test]
fn test_double_completion_is_reported() {
    let store = TestStore::new();
    todo(&store).args(["add", "Once"]).assert().success();
    todo(&store).args(["done", "1"]).assert().success();

    todo(&store)
        .args(["done", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Task 1 is already completed"));
}

#[test]
fn test_unknown_id_is_not_found() {
    let store = TestStore::new();

    todo(&store)
        .args(["delete", "42"])
        .assert()
        .code(1)
        .stdout("Task #42 not found.\n");
}

#[test]
fn test_invalid_priority_is_usage_error() {
    let store = TestStore::new();

    todo(&store)
        .args(["add", "x", "--priority", "urgent"])
        .assert()
        .code(2);
}

#[test]
fn test_corrupted_file_is_fatal() {
    let store = TestStore::with_contents("not json at all");

    todo(&store)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Fatal error"))
        .stderr(predicate::str::contains("Corrupted task file"));

    // The unreadable file is left untouched
    assert_eq!(store.read_raw(), "not json at all");
}

#[test]
fn test_unwritable_file_reports_unsaved_change() {
    let store = TestStore::new();
    let blocked = store.blocked_path();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.arg("--file")
        .arg(&blocked)
        .args(["add", "lost"])
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to save the new task"))
        .stderr(predicate::str::contains("was not saved"));
}

#[test]
fn test_todo_file_env_is_used() {
    let store = TestStore::new();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("TODO_FILE", store.path())
        .env_remove("RUST_LOG")
        .args(["add", "from env"])
        .assert()
        .success();

    assert!(store.read_raw().contains("from env"));
}
