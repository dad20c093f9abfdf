use colored::Colorize;
use std::io::Write;

/// A file skipped during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The file is not valid UTF-8, most likely a binary
    Undecodable { path: String },
    /// The file could not be read at all
    Unreadable { path: String, reason: String },
}

impl ScanWarning {
    pub fn path(&self) -> &str {
        match self {
            ScanWarning::Undecodable { path } | ScanWarning::Unreadable { path, .. } => path,
        }
    }
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanWarning::Undecodable { path } => write!(
                f,
                "Could not decode file \"{}\". If this is a binary file, consider adding it to your .bignore or .gitignore",
                path
            ),
            ScanWarning::Unreadable { path, reason } => {
                write!(f, "Could not read file \"{}\": {}", path, reason)
            }
        }
    }
}

/// Receives the non-fatal warnings of a scan
pub trait Diagnostics {
    fn warn(&mut self, warning: ScanWarning);
}

impl Diagnostics for Vec<ScanWarning> {
    fn warn(&mut self, warning: ScanWarning) {
        self.push(warning);
    }
}

/// Writes warnings as `Warning: <message>` lines, the label in yellow
pub struct WarningWriter<'w> {
    writer: &'w mut dyn Write,
}

impl<'w> WarningWriter<'w> {
    pub fn new(writer: &'w mut dyn Write) -> Self {
        WarningWriter { writer }
    }
}

impl Diagnostics for WarningWriter<'_> {
    fn warn(&mut self, warning: ScanWarning) {
        // a broken stderr must not abort the scan
        writeln!(self.writer, "{}: {}", "Warning".yellow(), warning).ok();
    }
}
