use crate::common::command::{repository_dir, run_bugs_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_without_a_list_prints_nothing(repository_dir: TempDir) {
    run_bugs_command(repository_dir.path(), &["print"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
