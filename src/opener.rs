//! OS link opening behind a narrow seam.

use crate::error::{Error, Result};

/// Opens a book link with the host system's default handler.
///
/// The session only calls this with a non-empty URL; empty links are
/// reported to the user instead of being attempted.
pub trait LinkOpener {
    fn open_link(&self, url: &str) -> Result<()>;
}

/// Delegates to the OS default handler (the browser, for http links).
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open_link(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|err| Error::OpenLink(format!("{url}: {err}")))
    }
}
