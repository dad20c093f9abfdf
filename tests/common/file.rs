use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        create_directory(parent);
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_binary_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        create_directory(parent);
    }

    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

/// Write `files_count` source files, each holding one line comment marker.
/// Returns the expected `./name: text` entry of every file.
pub fn write_generated_markers(dir: &Path, files_count: usize) -> Vec<String> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|index| {
            let file_name = format!("{}_{}.rs", Word().fake::<String>(), index);
            let text = Words(3..6).fake::<Vec<String>>().join(" ");

            write_file(FileSpec::new(
                dir.join(&file_name),
                format!("fn main() {{}}\n// TODO: {}\n", text),
            ));

            format!("./{}: {}", file_name, text)
        })
        .collect()
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}
