use crate::PathFormat;
use derive_new::new;

/// A `TODO:` comment found in a source file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Marker {
    /// Root-relative path of the file, e.g. `./src/main.c`
    source_path: String,
    /// 1-based line of the comment
    line_number: Option<usize>,
    text: String,
}

impl Marker {
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name component of the source path
    pub fn file_name(&self) -> &str {
        self.source_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.source_path)
    }

    /// Render as a bug list entry, e.g. `./src/main.c:12: fix race`
    pub fn render(&self, path_format: PathFormat, line_numbers: bool) -> String {
        let path = match path_format {
            PathFormat::Long => self.source_path(),
            PathFormat::Short => self.file_name(),
            PathFormat::None => return self.text.clone(),
        };

        match self.line_number.filter(|_| line_numbers) {
            Some(line_number) => format!("{}:{}: {}", path, line_number, self.text),
            None => format!("{}: {}", path, self.text),
        }
    }
}
