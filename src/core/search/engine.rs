//! Keyword search over the resource store.
//!
//! A search is a substring match of the query against every keyword.
//! Each matched keyword's usage count goes up by one per call. When
//! nothing matches, the lookup pipeline falls back to close-match
//! suggestions over the full keyword set.

use crate::core::error::{KeylinkError, Result};
use crate::core::search::suggest;
use crate::core::storage::{ResourceStore, SearchHistory};
use crate::core::types::{LookupOutcome, MatchCase, ResourceMatch, Suggestion};
use std::sync::Arc;

/// Matching policy for [`SearchService`]
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub case: MatchCase,
    pub suggestion_cutoff: f64,
    pub max_suggestions: usize,
    pub max_query_length: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case: MatchCase::Sensitive,
            suggestion_cutoff: suggest::DEFAULT_CUTOFF,
            max_suggestions: suggest::DEFAULT_MAX_SUGGESTIONS,
            max_query_length: 200,
        }
    }
}

/// Search, suggestion, and lookup entry point
pub struct SearchService {
    store: Arc<ResourceStore>,
    history: Arc<SearchHistory>,
    settings: SearchSettings,
}

impl SearchService {
    pub fn new(
        store: Arc<ResourceStore>,
        history: Arc<SearchHistory>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            store,
            history,
            settings,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Substring search that counts a hit for every matched keyword.
    ///
    /// Surrounding whitespace is ignored. A blank query matches nothing
    /// and touches no counts.
    pub fn search(&self, query: &str) -> Result<Vec<ResourceMatch>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.check_length(query)?;

        let matches = self.store.find_and_count(query, self.settings.case)?;

        tracing::debug!("Query '{}' matched {} keyword(s)", query, matches.len());
        Ok(matches)
    }

    /// Close matches for `query` among all stored keywords
    pub fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let universe = self.store.all_keywords()?;
        Ok(suggest::close_matches(
            query,
            &universe,
            self.settings.max_suggestions,
            self.settings.suggestion_cutoff,
        ))
    }

    /// Full lookup: log the query, search, and suggest on a miss.
    ///
    /// An over-long query is rejected before it reaches the log. A
    /// history write failure is logged and otherwise ignored.
    pub fn lookup(&self, query: &str) -> Result<LookupOutcome> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(LookupOutcome::NoMatch);
        }

        self.check_length(trimmed)?;

        if let Err(e) = self.history.append(trimmed) {
            tracing::warn!("{}", e);
        }

        let matches = self.search(trimmed)?;
        if !matches.is_empty() {
            return Ok(LookupOutcome::Matches(matches));
        }

        let suggestions = self.suggest(trimmed)?;
        if suggestions.is_empty() {
            Ok(LookupOutcome::NoMatch)
        } else {
            Ok(LookupOutcome::Suggestions(suggestions))
        }
    }

    fn check_length(&self, query: &str) -> Result<()> {
        let len = query.chars().count();
        if len > self.settings.max_query_length {
            return Err(KeylinkError::InvalidInput(format!(
                "query is {len} characters long (max {})",
                self.settings.max_query_length
            )));
        }
        Ok(())
    }
}
