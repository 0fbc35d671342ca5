//! Core data types for keylink.
//!
//! Records, query results, and lookup outcomes shared by the store,
//! the search engine, and the front ends.

use serde::{Deserialize, Serialize};

/// A persisted keyword → locator mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Unique lookup key
    pub keyword: String,

    /// URL (or equivalent reference) opened on a match
    pub locator: String,

    /// Number of lookups that matched this keyword
    pub usage_count: u64,

    /// Free-form label, empty when untagged
    pub tag: String,
}

/// A (keyword, locator) pair returned by substring and tag queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMatch {
    pub keyword: String,
    pub locator: String,
}

impl ResourceMatch {
    pub fn new(keyword: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            locator: locator.into(),
        }
    }
}

/// A (keyword, usage count) pair returned by the ranking query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordUsage {
    pub keyword: String,
    pub usage_count: u64,
}

/// A near-match proposed when a query matched nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub keyword: String,

    /// Sequence-matcher ratio in [0, 1]
    pub similarity: f64,
}

/// Seed entry applied by a store reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub keyword: String,
    pub locator: String,
}

impl SeedEntry {
    pub fn new(keyword: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            locator: locator.into(),
        }
    }
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for SeedEntry {
    fn from((keyword, locator): (K, L)) -> Self {
        Self::new(keyword, locator)
    }
}

/// How substring containment compares characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCase {
    /// Exact character comparison
    #[default]
    Sensitive,
    /// ASCII case folding (SQLite `LIKE` semantics)
    Insensitive,
}

impl MatchCase {
    pub fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}

/// Result of the full lookup pipeline (search, then suggest on a miss)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// At least one keyword contained the query; counts were incremented
    Matches(Vec<ResourceMatch>),

    /// Nothing matched, but these keywords are close
    Suggestions(Vec<Suggestion>),

    /// Nothing matched and nothing was close enough
    NoMatch,
}

impl LookupOutcome {
    /// Matched pairs, empty unless this is a hit
    pub fn matches(&self) -> &[ResourceMatch] {
        match self {
            LookupOutcome::Matches(matches) => matches,
            _ => &[],
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, LookupOutcome::Matches(_))
    }
}
