use crate::common::command::{read_bug_texts, repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&["update"], "./src/net/socket.c: fix race")]
#[case(&["update", "--line-numbers"], "./src/net/socket.c:3: fix race")]
#[case(&["update", "--path", "short"], "socket.c: fix race")]
#[case(&["update", "-p", "short", "-l"], "socket.c:3: fix race")]
#[case(&["update", "--path", "none"], "fix race")]
fn path_format_controls_entry_prefix(
    repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) {
    write_file(FileSpec::new(
        repository_dir.path().join("src").join("net").join("socket.c"),
        "#include <sys/socket.h>\n\n/* TODO: fix race */\n".to_string(),
    ));

    run_bugs_command(repository_dir.path(), args)
        .assert()
        .success();

    assert_eq!(read_bug_texts(repository_dir.path()), vec![expected]);
}
