use crate::common::command::{repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_keeps_entries_starting_with_a_hash(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("client.c"),
        "// TODO: # of retries should be configurable\n".to_string(),
    ));

    run_bugs_command(repository_dir.path(), &["update", "--path", "none"])
        .assert()
        .success();

    run_bugs_command(repository_dir.path(), &["print"])
        .assert()
        .success()
        .stdout("# of retries should be configurable\n");
}
