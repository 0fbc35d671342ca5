//! Search, suggestion, and ranking over the resource store.
//!
//! - **engine**: substring search with usage counting, and the lookup
//!   pipeline (history, search, suggest)
//! - **suggest**: sequence-matcher similarity and close matches
//! - **ranking**: most-used keywords and tag queries

mod engine;
mod ranking;
pub mod suggest;

pub use engine::{SearchService, SearchSettings};
pub use ranking::RankingService;
pub use suggest::{close_matches, similarity, suggest};
