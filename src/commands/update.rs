use crate::PathFormat;
use crate::areas::bug_list::{BugList, WriteOutcome};
use crate::areas::repository::Repository;
use crate::artifacts::scan::diagnostics::WarningWriter;
use derive_new::new;
use std::io::Write;
use std::ops::DerefMut;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct UpdateOptions {
    pub path_format: PathFormat,
    pub line_numbers: bool,
}

impl Repository {
    /// Rescan the whole repository and replace its bug list
    pub fn update(&self, opts: &UpdateOptions) -> anyhow::Result<()> {
        if opts.line_numbers && opts.path_format == PathFormat::None {
            anyhow::bail!("--line-numbers is only valid when --path is not none");
        }

        let scanner = self.scanner()?;
        // the previous list is gone before the walk so it is never scanned itself
        let mut bug_list = BugList::reset(&scanner.locate_root(self.pwd())?)?;
        let scan = {
            let mut err_writer = self.err_writer();
            let mut diagnostics = WarningWriter::new(err_writer.deref_mut());
            scanner.run(self.pwd(), &mut diagnostics)?
        };

        for marker in scan.markers() {
            bug_list.add(marker.render(opts.path_format, opts.line_numbers));
        }

        match bug_list.write(true)? {
            WriteOutcome::Written(count) => writeln!(
                self.writer(),
                "Updated {} bugs in {}",
                count,
                bug_list.path().display()
            )?,
            WriteOutcome::Deleted => writeln!(self.writer(), "No bugs found in {}", scan.root())?,
        }

        Ok(())
    }
}
