//! Configuration management for keylink.
//!
//! Configuration is loaded from a TOML file and environment variables,
//! with defaults for every setting. The seed list, the shortcut table,
//! and the phone directory live here too so a deployment can swap in
//! its own data without rebuilding.

use crate::core::error::{KeylinkError, Result};
use crate::core::seed;
use crate::core::types::SeedEntry;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyword → locator pairs applied on every reseed
    #[serde(default = "seed::default_seed")]
    pub seed: Vec<SeedEntry>,

    /// Named locators opened directly (`keylink open map`).
    /// Names are lowercased on load; lookups are case-insensitive.
    #[serde(
        default = "seed::default_shortcuts",
        deserialize_with = "lowercase_keys"
    )]
    pub shortcuts: BTreeMap<String, String>,

    /// Department → phone number
    #[serde(default = "seed::default_directory")]
    pub directory: BTreeMap<String, String>,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Drop and reseed the resource table at startup
    #[serde(default = "default_true")]
    pub reseed_on_start: bool,
}

/// Search history configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Append-only log file, one query per line
    #[serde(default = "default_history_path")]
    pub path: PathBuf,

    /// Number of entries surfaced by `history`
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Substring matching compares characters exactly
    #[serde(default = "default_true")]
    pub case_sensitive: bool,

    /// Minimum similarity for a suggestion
    #[serde(default = "default_suggestion_cutoff")]
    pub suggestion_cutoff: f64,

    /// Maximum suggestions returned on a miss
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Maximum query length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Ranking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Entries in the most-used listing
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

/// Front-end configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,

    /// Open matched locators right after a successful lookup
    #[serde(default = "default_true")]
    pub open_on_match: bool,
}

/// Message set used by the front ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = KeylinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Language::Ko),
            "en" | "english" => Ok(Language::En),
            other => Err(KeylinkError::ConfigError(format!(
                "Unknown language '{other}' (expected 'ko' or 'en')"
            ))),
        }
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./data/keylink.db")
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./data/search_history.txt")
}

fn default_recent_limit() -> usize {
    10
}

fn default_suggestion_cutoff() -> f64 {
    0.6
}

fn default_max_suggestions() -> usize {
    3
}

fn default_max_query_length() -> usize {
    200
}

fn default_top_n() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            history: HistoryConfig::default(),
            search: SearchConfig::default(),
            ranking: RankingConfig::default(),
            ui: UiConfig::default(),
            seed: seed::default_seed(),
            shortcuts: seed::default_shortcuts(),
            directory: seed::default_directory(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            reseed_on_start: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            suggestion_cutoff: default_suggestion_cutoff(),
            max_suggestions: default_max_suggestions(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            open_on_match: true,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| KeylinkError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File lookup order:
    /// 1. KEYLINK_CONFIG env var
    /// 2. XDG config file (~/.config/keylink/config.toml)
    /// 3. ./keylink.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("KEYLINK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("keylink.toml").exists() {
                Self::from_file("keylink.toml")?
            } else {
                Self::default()
            }
        };

        // Relative defaults move under the XDG directories
        if config.storage.db_path == default_db_path() {
            config.storage.db_path = xdg.database_file();
        }
        if config.history.path == default_history_path() {
            config.history.path = xdg.history_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("KEYLINK_DB_PATH") {
            self.storage.db_path = PathBuf::from(path);
        }
        if let Some(flag) = env_flag("KEYLINK_RESEED_ON_START") {
            self.storage.reseed_on_start = flag;
        }

        if let Ok(path) = env::var("KEYLINK_HISTORY_FILE") {
            self.history.path = PathBuf::from(path);
        }
        if let Some(limit) = env_parse("KEYLINK_HISTORY_LIMIT") {
            self.history.recent_limit = limit;
        }

        if let Some(flag) = env_flag("KEYLINK_CASE_SENSITIVE") {
            self.search.case_sensitive = flag;
        }
        if let Some(cutoff) = env_parse("KEYLINK_SUGGESTION_CUTOFF") {
            self.search.suggestion_cutoff = cutoff;
        }
        if let Some(n) = env_parse("KEYLINK_MAX_SUGGESTIONS") {
            self.search.max_suggestions = n;
        }
        if let Some(len) = env_parse("KEYLINK_MAX_QUERY_LENGTH") {
            self.search.max_query_length = len;
        }

        if let Some(n) = env_parse("KEYLINK_TOP_N") {
            self.ranking.top_n = n;
        }

        if let Some(lang) = env_parse("KEYLINK_LANG") {
            self.ui.language = lang;
        }
        if let Some(flag) = env_flag("KEYLINK_OPEN_ON_MATCH") {
            self.ui.open_on_match = flag;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let cutoff = self.search.suggestion_cutoff;
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(KeylinkError::ConfigError(format!(
                "Suggestion cutoff must be within [0, 1], got {cutoff}"
            )));
        }

        if self.search.max_suggestions == 0 {
            return Err(KeylinkError::ConfigError(
                "Max suggestions must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(KeylinkError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.ranking.top_n == 0 {
            return Err(KeylinkError::ConfigError(
                "Top N must be non-zero".to_string(),
            ));
        }

        if self.history.recent_limit == 0 {
            return Err(KeylinkError::ConfigError(
                "History limit must be non-zero".to_string(),
            ));
        }

        if let Some(entry) = self
            .seed
            .iter()
            .find(|e| e.keyword.trim().is_empty() || e.locator.trim().is_empty())
        {
            return Err(KeylinkError::ConfigError(format!(
                "Seed entry has an empty keyword or locator: {entry:?}"
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Database: {:?}", self.storage.db_path);
        tracing::debug!("  Reseed on start: {}", self.storage.reseed_on_start);
        tracing::debug!("  History log: {:?}", self.history.path);
        tracing::debug!("  Case sensitive: {}", self.search.case_sensitive);
        tracing::debug!(
            "  Suggestions: up to {} at cutoff {}",
            self.search.max_suggestions,
            self.search.suggestion_cutoff
        );
        tracing::debug!("  Seed entries: {}", self.seed.len());
        tracing::debug!("  Language: {}", self.ui.language.code());
    }
}

fn lowercase_keys<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, locator)| (name.trim().to_lowercase(), locator))
        .collect())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
