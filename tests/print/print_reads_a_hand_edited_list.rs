use crate::common::command::{bug_list_path, repository_dir, run_bugs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_reads_a_hand_edited_list(repository_dir: TempDir) {
    write_file(FileSpec::new(
        bug_list_path(repository_dir.path()),
        "# triaged on monday\n\
         ./a.py: retry on timeout | id:0123456789abcdef0123456789abcdef01234567\n\
         \n\
         write the changelog\n"
            .to_string(),
    ));

    run_bugs_command(repository_dir.path(), &["print"])
        .assert()
        .success()
        .stdout("./a.py: retry on timeout\nwrite the changelog\n");
}
