use crate::common::file::create_directory;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

const BUG_LIST_FILE: &str = "bugs";
const ID_SEPARATOR: &str = " | id:";

#[fixture]
pub fn plain_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repository_dir(plain_dir: TempDir) -> TempDir {
    create_directory(&plain_dir.path().join(".git"));
    plain_dir
}

pub fn run_bugs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bugs").expect("Failed to find bugs binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn bug_list_path(dir: &Path) -> std::path::PathBuf {
    dir.join(BUG_LIST_FILE)
}

/// Entry texts of the bug list at the root of `dir`, ids stripped
pub fn read_bug_texts(dir: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(bug_list_path(dir))
        .unwrap_or_else(|e| panic!("Failed to read bug list in {:?}: {}", dir, e));

    content
        .lines()
        .map(|line| {
            let (text, id) = line
                .rsplit_once(ID_SEPARATOR)
                .unwrap_or_else(|| panic!("Missing id in bug list line {:?}", line));
            assert_eq!(id.len(), 40, "id is not a sha1 hex digest: {:?}", id);
            text.to_string()
        })
        .collect()
}
