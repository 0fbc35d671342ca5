//! Locator opening.
//!
//! The core only returns locators; front ends decide whether and how to
//! open them through a [`LocatorOpener`].

use std::io;

/// Opens a locator for the user
pub trait LocatorOpener {
    fn open(&self, locator: &str) -> io::Result<()>;

    /// False when `open` skips locators instead of opening them
    fn enabled(&self) -> bool {
        true
    }
}

/// Opens locators in the default web browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl LocatorOpener for BrowserOpener {
    fn open(&self, locator: &str) -> io::Result<()> {
        tracing::debug!("Opening {} in browser", locator);
        webbrowser::open(locator)
    }
}

/// Leaves locators unopened (`--no-open`)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl LocatorOpener for NoopOpener {
    fn open(&self, locator: &str) -> io::Result<()> {
        tracing::debug!("Not opening {} (opening disabled)", locator);
        Ok(())
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Pick the opener for a session
pub fn select(open_on_match: bool) -> Box<dyn LocatorOpener> {
    if open_on_match {
        Box::new(BrowserOpener)
    } else {
        Box::new(NoopOpener)
    }
}
