//! Most-used ranking and tag queries.

use crate::core::error::Result;
use crate::core::storage::ResourceStore;
use crate::core::types::{KeywordUsage, ResourceMatch};
use std::sync::Arc;

pub struct RankingService {
    store: Arc<ResourceStore>,
    default_top_n: usize,
}

impl RankingService {
    pub fn new(store: Arc<ResourceStore>, default_top_n: usize) -> Self {
        Self {
            store,
            default_top_n,
        }
    }

    /// Most-used keywords, `n` or the configured default.
    ///
    /// An empty result means the store holds no records.
    pub fn top_keywords(&self, n: Option<usize>) -> Result<Vec<KeywordUsage>> {
        self.store.top_by_count(n.unwrap_or(self.default_top_n))
    }

    /// Keywords carrying exactly `tag`; empty when none do
    pub fn by_tag(&self, tag: &str) -> Result<Vec<ResourceMatch>> {
        self.store.find_by_tag(tag)
    }
}
