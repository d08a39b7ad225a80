use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("examsplit").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("answers"))
        .stdout(predicate::str::contains("lookup"));
}

#[test]
fn extract_subcommand_help() {
    cmd()
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--zoom"))
        .stdout(predicate::str::contains("--no-split"));
}

#[test]
fn answers_subcommand_help() {
    cmd()
        .args(["answers", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extract_requires_file_argument() {
    cmd()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn lookup_requires_all_arguments() {
    cmd()
        .args(["lookup", "key.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SECTION"));
}

#[test]
fn lookup_finds_answer_in_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let key_path = dir.path().join("doc_answers.json");
    let key = serde_json::json!({ "MATEMATİK": { "5": "C" } });
    std::fs::write(&key_path, serde_json::to_string(&key).unwrap()).unwrap();

    cmd()
        .args(["lookup", key_path.to_str().unwrap(), "MATEMATİK", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C"));
}

#[test]
fn lookup_unknown_question_fails() {
    let dir = tempfile::tempdir().unwrap();
    let key_path = dir.path().join("doc_answers.json");
    let key = serde_json::json!({ "MATEMATİK": { "5": "C" } });
    std::fs::write(&key_path, serde_json::to_string(&key).unwrap()).unwrap();

    cmd()
        .args(["lookup", key_path.to_str().unwrap(), "MATEMATİK", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No answer"));
}

#[test]
fn lookup_missing_key_file_fails() {
    cmd()
        .args(["lookup", "does_not_exist.json", "GENEL", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}
