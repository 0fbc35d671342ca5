//! Resource commands - add, delete, list, keywords, reset
//!
//! A duplicate `add` is reported as a failed command; deleting an
//! unknown keyword is not an error and reports `removed: 0`.

use crate::cli::messages::Msg;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::KeylinkError;
use crate::core::services::Services;
use crate::core::types::ResourceRecord;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// New keyword (must not exist yet)
    pub keyword: String,

    /// Locator opened when the keyword matches
    pub locator: String,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Keyword to delete
    pub keyword: String,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for the keywords command
#[derive(Args, Debug)]
pub struct KeywordsArgs {}

/// Arguments for the reset command
#[derive(Args, Debug)]
pub struct ResetArgs {}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub keyword: String,
    pub locator: String,
    pub added: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub keyword: String,
    pub removed: usize,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub resources: Vec<ResourceRecord>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub inserted: usize,
}

/// Execute the add command
pub async fn execute_add(
    args: AddArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let keyword = args.keyword.trim().to_string();
    let locator = args.locator.trim().to_string();

    match services.store.insert(&keyword, &locator) {
        Ok(()) => {}
        Err(KeylinkError::DuplicateKeyword(_)) => {
            return Err(format!("{} '{}'", Msg::Duplicate.text(lang), keyword).into());
        }
        Err(e) => return Err(e.into()),
    }

    let response = AddResponse {
        keyword,
        locator,
        added: true,
    };

    match format {
        OutputFormat::Human => output::print_success(&format!(
            "{} '{}'",
            Msg::Added.text(lang),
            response.keyword
        )),
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

/// Execute the delete command
pub async fn execute_delete(
    args: DeleteArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let keyword = args.keyword.trim().to_string();
    let removed = services.store.remove(&keyword)?;

    let response = DeleteResponse { keyword, removed };

    match format {
        OutputFormat::Human => {
            if response.removed > 0 {
                output::print_success(&format!(
                    "{} '{}'",
                    Msg::Deleted.text(lang),
                    response.keyword
                ));
            } else {
                println!(
                    "{} '{}'",
                    Msg::KeywordNotFound.text(lang),
                    colors::keyword(&response.keyword)
                );
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

/// Execute the list command
pub async fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let resources = services.store.list_all()?;

    let response = ListResponse {
        count: resources.len(),
        resources,
    };

    match format {
        OutputFormat::Human => {
            if response.resources.is_empty() {
                println!("{}", Msg::NoRecords.text(lang));
            } else {
                output::print_header(Msg::RecordsHeader.text(lang));
                for record in &response.resources {
                    println!("{}", output::format_record(record, lang));
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

/// Execute the keywords command (help listing)
pub async fn execute_keywords(
    _args: KeywordsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let keywords = services.store.all_keywords()?;

    match format {
        OutputFormat::Human => {
            output::print_header(Msg::KeywordsHeader.text(services.config.ui.language));
            for keyword in &keywords {
                println!("  - {}", colors::keyword(keyword));
            }
        }
        OutputFormat::Json => output::print_json(&keywords)?,
    }

    Ok(())
}

/// Execute the reset command
pub async fn execute_reset(
    _args: ResetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let inserted = services.reseed()?;
    let response = ResetResponse { inserted };

    match format {
        OutputFormat::Human => output::print_success(&format!(
            "{} {}",
            Msg::Reseeded.text(services.config.ui.language),
            response.inserted
        )),
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
