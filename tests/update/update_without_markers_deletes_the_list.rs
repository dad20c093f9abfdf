use crate::common::command::{bug_list_path, repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn update_without_markers_deletes_the_list(repository_dir: TempDir) {
    let root = repository_dir.path();
    write_file(FileSpec::new(
        bug_list_path(root),
        "stale entry | id:0000000000000000000000000000000000000000\n".to_string(),
    ));
    write_file(FileSpec::new(root.join("main.c"), "int main() {}\n".to_string()));

    run_bugs_command(root, &["update"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No bugs found in"));

    assert!(!bug_list_path(root).exists());
}
