//! CLI test helpers
//!
//! - Arc<Services> wrappers matching CLI execute() signatures
//! - Openers that record or refuse instead of launching a browser

use crate::common::{create_test_services, small_seed, TestEnv};
use keylink::cli::opener::LocatorOpener;
use keylink::Services;
use std::cell::RefCell;
use std::io;
use std::sync::Arc;

/// Create started test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> (Arc<Services>, TestEnv) {
    let (services, env) = create_test_services(small_seed());
    (Arc::new(services), env)
}

/// Remembers every locator it was asked to open
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl LocatorOpener for RecordingOpener {
    fn open(&self, locator: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(locator.to_string());
        Ok(())
    }
}

/// Fails every open
pub struct FailingOpener;

impl LocatorOpener for FailingOpener {
    fn open(&self, _locator: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cli_test_services() {
        let (services, _env) = create_cli_test_services();
        assert_eq!(services.store.count().unwrap(), 3);
    }

    #[test]
    fn test_recording_opener_records() {
        let opener = RecordingOpener::default();
        opener.open("https://a").unwrap();
        assert_eq!(*opener.opened.borrow(), vec!["https://a".to_string()]);
    }
}
