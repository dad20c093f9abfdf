use crate::areas::bug_list::BugList;
use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the persisted bug list, one entry per line
    pub fn print(&self) -> anyhow::Result<()> {
        let root = self.scanner()?.locate_root(self.pwd())?;
        let bug_list = BugList::open(&root)?;

        for entry in bug_list.entries() {
            writeln!(self.writer(), "{}", entry.text())?;
        }

        Ok(())
    }
}
