use crate::common::command::{read_bug_texts, repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn update_writes_markers_of_every_comment_style(repository_dir: TempDir) {
    let root = repository_dir.path();
    write_file(FileSpec::new(
        root.join("src").join("main.c"),
        "/* TODO: fix race */\nint main() { return 0; }\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("src").join("lib.rs"),
        "// TODO: add tests\npub fn run() {}\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("scripts").join("run.sh"),
        "#!/bin/sh\n# TODO: refactor\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("init.el"),
        ";; TODO: bind keys\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("paper.tex"),
        "\\section{Intro}\n%TODO:cite sources\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("README.md"),
        "Nothing to do here. TODO: not a comment\n".to_string(),
    ));

    run_bugs_command(root, &["update"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Updated 5 bugs in"));

    assert_eq!(
        read_bug_texts(root),
        vec![
            "./init.el: bind keys",
            "./paper.tex: cite sources",
            "./scripts/run.sh: refactor",
            "./src/lib.rs: add tests",
            "./src/main.c: fix race",
        ]
    );
}
