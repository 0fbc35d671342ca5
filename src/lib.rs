//! keylink - keyword lookup assistant
//!
//! Type a short keyword, get the matching link. keylink keeps a small
//! curated table of keyword → locator pairs in SQLite, matches queries
//! by substring, counts how often each keyword is hit, and suggests
//! close keywords when nothing matches.
//!
//! # Architecture
//!
//! - **core**: Domain logic (front-end agnostic)
//!   - config, error, types, seed, xdg
//!   - storage (resource table, search history log)
//!   - search (substring search, suggestions, ranking)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - one-shot subcommands and the interactive shell
//!
//! # Example
//!
//! ```no_run
//! use keylink::{Config, LookupOutcome, Services};
//!
//! let services = Services::start(Config::load()?)?;
//! if let LookupOutcome::Matches(matches) = services.search.lookup("도서")? {
//!     for m in matches {
//!         println!("{} -> {}", m.keyword, m.locator);
//!     }
//! }
//! # Ok::<(), keylink::KeylinkError>(())
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{KeylinkError, Result};
pub use core::services::Services;
pub use core::storage::{ResourceStore, SearchHistory};
pub use core::types::*;
