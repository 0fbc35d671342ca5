//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for one
//! group of CLI commands. The interactive shell reuses the same services.

pub mod completions;
pub mod config;
pub mod history;
pub mod ranking;
pub mod resources;
pub mod search;
pub mod shortcuts;
pub mod tags;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use history::HistoryArgs;
pub use ranking::TopArgs;
pub use resources::{AddArgs, DeleteArgs, KeywordsArgs, ListArgs, ResetArgs};
pub use search::SearchArgs;
pub use shortcuts::{OpenArgs, PhoneArgs};
pub use tags::{ByTagArgs, TagArgs};
