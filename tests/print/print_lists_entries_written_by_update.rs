use crate::common::command::{repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_lists_entries_written_by_update(repository_dir: TempDir) {
    let root = repository_dir.path();
    write_file(FileSpec::new(
        root.join("src").join("main.c"),
        "/* TODO: fix race */\n// TODO: add tests\n".to_string(),
    ));
    write_file(FileSpec::new(root.join("build.sh"), "# TODO: cache\n".to_string()));

    run_bugs_command(root, &["update", "-l"]).assert().success();

    run_bugs_command(root, &["print"])
        .assert()
        .success()
        .stdout("./build.sh:1: cache\n./src/main.c:1: fix race\n./src/main.c:2: add tests\n");
}
