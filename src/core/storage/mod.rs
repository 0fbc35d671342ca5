//! Storage layer: the SQLite resource table and the search history log.
//!
//! # On-disk layout
//!
//! ```text
//! $XDG_DATA_HOME/keylink/keylink.db            # resources table
//! $XDG_STATE_HOME/keylink/search_history.txt   # one query per line
//! ```

mod history;
mod store;

pub use history::SearchHistory;
pub use store::ResourceStore;
