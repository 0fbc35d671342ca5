//! Core domain logic (front-end agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Records, matches, suggestions, lookup outcomes
//! - **seed**: Built-in seed list, shortcuts, phone directory
//! - **xdg**: XDG directory handling
//! - **storage**: SQLite resource table and search history log
//! - **search**: Substring search, suggestions, ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod seed;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{KeylinkError, Result};
pub use services::Services;
