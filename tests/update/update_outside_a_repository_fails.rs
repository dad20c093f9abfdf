use crate::common::command::{plain_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn update_outside_a_repository_fails(plain_dir: TempDir) {
    write_file(FileSpec::new(
        plain_dir.path().join("main.c"),
        "// TODO: fix race\n".to_string(),
    ));

    run_bugs_command(plain_dir.path(), &["update"])
        .assert()
        .code(128)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "fatal: not a git repository (or any of the parent directories)",
        ));

    assert!(!plain_dir.path().join("bugs").exists());
}
