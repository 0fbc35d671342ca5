//! Config command - show the effective configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also print the seed list, shortcuts, and phone directory
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub db_path: String,
    pub reseed_on_start: bool,
    pub history_path: String,
    pub recent_limit: usize,
    pub case_sensitive: bool,
    pub suggestion_cutoff: f64,
    pub max_suggestions: usize,
    pub max_query_length: usize,
    pub top_n: usize,
    pub language: String,
    pub open_on_match: bool,
    pub seed_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<ConfigTables>,
}

#[derive(Debug, Serialize)]
pub struct ConfigTables {
    pub seed: Vec<(String, String)>,
    pub shortcuts: Vec<(String, String)>,
    pub directory: Vec<(String, String)>,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let tables = args.all.then(|| ConfigTables {
        seed: config
            .seed
            .iter()
            .map(|e| (e.keyword.clone(), e.locator.clone()))
            .collect(),
        shortcuts: config
            .shortcuts
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        directory: config
            .directory
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    });

    let response = ConfigResponse {
        db_path: config.storage.db_path.display().to_string(),
        reseed_on_start: config.storage.reseed_on_start,
        history_path: config.history.path.display().to_string(),
        recent_limit: config.history.recent_limit,
        case_sensitive: config.search.case_sensitive,
        suggestion_cutoff: config.search.suggestion_cutoff,
        max_suggestions: config.search.max_suggestions,
        max_query_length: config.search.max_query_length,
        top_n: config.ranking.top_n,
        language: config.ui.language.code().to_string(),
        open_on_match: config.ui.open_on_match,
        seed_entries: config.seed.len(),
        tables,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  storage:");
            println!("    db_path: {}", response.db_path);
            println!("    reseed_on_start: {}", response.reseed_on_start);
            println!("  history:");
            println!("    path: {}", response.history_path);
            println!("    recent_limit: {}", response.recent_limit);
            println!("  search:");
            println!("    case_sensitive: {}", response.case_sensitive);
            println!("    suggestion_cutoff: {}", response.suggestion_cutoff);
            println!("    max_suggestions: {}", response.max_suggestions);
            println!("    max_query_length: {}", response.max_query_length);
            println!("  ranking:");
            println!("    top_n: {}", response.top_n);
            println!("  ui:");
            println!("    language: {}", response.language);
            println!("    open_on_match: {}", response.open_on_match);
            println!("  seed entries: {}", response.seed_entries);

            if let Some(tables) = &response.tables {
                for (title, rows) in [
                    ("seed", &tables.seed),
                    ("shortcuts", &tables.shortcuts),
                    ("directory", &tables.directory),
                ] {
                    println!("  {title}:");
                    for (key, value) in rows {
                        println!("    {}: {}", colors::keyword(key), value);
                    }
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
