use crate::areas::filesystem::{FileSystem, OsFileSystem};
use crate::artifacts::scan::scanner::Scanner;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point of the commands: the directory `bugs` was started from and the
/// writers its output goes to
pub struct Repository {
    pwd: Box<Path>,
    fs: OsFileSystem,
    writer: RefCell<Box<dyn std::io::Write>>,
    err_writer: RefCell<Box<dyn std::io::Write>>,
}

impl Repository {
    pub fn new(
        pwd: &str,
        writer: Box<dyn std::io::Write>,
        err_writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let pwd = Path::new(pwd).canonicalize()?;

        Ok(Repository {
            pwd: pwd.into_boxed_path(),
            fs: OsFileSystem,
            writer: RefCell::new(writer),
            err_writer: RefCell::new(err_writer),
        })
    }

    pub fn pwd(&self) -> &Path {
        &self.pwd
    }

    pub fn fs(&self) -> &dyn FileSystem {
        &self.fs
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn err_writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.err_writer.borrow_mut()
    }

    pub fn scanner(&self) -> anyhow::Result<Scanner<'_>> {
        Scanner::new(self.fs())
    }
}
