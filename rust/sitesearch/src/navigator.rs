//! Navigation targets for resolved URLs.

use std::io::Write;

use log::{error, info};
use sitesearch_core::Navigator;

/// Opens URLs in the system's default browser, detached from this process.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) {
        info!("opening {}", url);
        if let Err(e) = open::that_detached(url) {
            error!("Failed to open {}: {}", url, e);
        }
    }
}

/// Writes each URL on its own line instead of opening it.
#[derive(Debug)]
pub struct PrintNavigator<W> {
    out: W,
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn navigate(&mut self, url: &str) {
        if let Err(e) = writeln!(self.out, "{}", url) {
            error!("Failed to write URL: {}", e);
        }
    }
}
