use crate::common::command::{read_bug_texts, repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rescan_replaces_the_previous_list(repository_dir: TempDir) {
    let root = repository_dir.path();
    let main = root.join("main.py");
    write_file(FileSpec::new(main.clone(), "# TODO: old task\n".to_string()));

    run_bugs_command(root, &["update"]).assert().success();
    assert_eq!(read_bug_texts(root), vec!["./main.py: old task"]);

    write_file(FileSpec::new(
        main,
        "# TODO: new task\nprint('hi')  # TODO: second task\n".to_string(),
    ));

    run_bugs_command(root, &["update"]).assert().success();
    assert_eq!(
        read_bug_texts(root),
        vec!["./main.py: new task", "./main.py: second task"]
    );
}
