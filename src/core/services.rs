//! Unified service container for keylink
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{RankingService, SearchService, SearchSettings};
use crate::core::storage::{ResourceStore, SearchHistory};
use crate::core::types::MatchCase;
use std::sync::Arc;

/// Unified services container
///
/// Every front end goes through this struct.
#[derive(Clone)]
pub struct Services {
    /// Resource table CRUD
    pub store: Arc<ResourceStore>,

    /// Search history log
    pub history: Arc<SearchHistory>,

    /// Search, suggestions, and lookups
    pub search: Arc<SearchService>,

    /// Most-used ranking and tag queries
    pub ranking: Arc<RankingService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Open the store and wire services from configuration.
    ///
    /// Does not reseed; see [`Services::start`].
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(ResourceStore::open(config.storage.db_path.clone())?);
        let history = Arc::new(SearchHistory::new(config.history.path.clone()));

        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            Arc::clone(&history),
            SearchSettings {
                case: MatchCase::from_flag(config.search.case_sensitive),
                suggestion_cutoff: config.search.suggestion_cutoff,
                max_suggestions: config.search.max_suggestions,
                max_query_length: config.search.max_query_length,
            },
        ));

        let ranking = Arc::new(RankingService::new(
            Arc::clone(&store),
            config.ranking.top_n,
        ));

        Ok(Self {
            store,
            history,
            search,
            ranking,
            config: Arc::new(config),
        })
    }

    /// Build services and apply the startup reseed policy
    pub fn start(config: Config) -> Result<Self> {
        let services = Self::new(config)?;
        if services.config.storage.reseed_on_start {
            services.reseed()?;
        }
        Ok(services)
    }

    /// Replace every record with the configured seed list
    pub fn reseed(&self) -> Result<usize> {
        self.store.reset(&self.config.seed)
    }

    /// The most recent queries, using the configured limit when `limit` is None
    pub fn recent_history(&self, limit: Option<usize>) -> Result<Vec<String>> {
        self.history
            .recent(limit.unwrap_or(self.config.history.recent_limit))
    }
}
