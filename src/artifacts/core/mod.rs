//! Shared utilities
//!
//! `print` can produce long output, so on a terminal it is routed through the
//! `minus` pager. Setting `NO_PAGER` or redirecting stdout prints directly.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable disabling the pager when set to any value
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether output should go through the pager
pub fn should_page() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// `Write` adapter pushing text into a [`Pager`]
///
/// Keep a clone of the pager and hand it to [`page_all`] once everything has
/// been written.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pager
            .push_str(String::from_utf8_lossy(buf))
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display everything pushed into `pager` and wait for the user to quit
pub fn page_all(pager: Pager) -> anyhow::Result<()> {
    minus::page_all(pager)?;
    Ok(())
}
