//! Tag commands - tag a keyword, list keywords by tag

use crate::cli::messages::Msg;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::ResourceMatch;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the tag command
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Keyword to tag
    pub keyword: String,

    /// Tag to set (an empty string clears it)
    pub tag: String,
}

/// Arguments for the by-tag command
#[derive(Args, Debug)]
pub struct ByTagArgs {
    /// Tag to list
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub keyword: String,
    pub tag: String,
    pub matched: bool,
}

#[derive(Debug, Serialize)]
pub struct ByTagResponse {
    pub tag: String,
    pub count: usize,
    pub resources: Vec<ResourceMatch>,
}

/// Execute the tag command
pub async fn execute_tag(
    args: TagArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let keyword = args.keyword.trim().to_string();
    let tag = args.tag.trim().to_string();

    let matched = services.store.set_tag(&keyword, &tag)?;
    let response = TagResponse {
        keyword,
        tag,
        matched,
    };

    match format {
        OutputFormat::Human => {
            if response.matched {
                output::print_success(&format!(
                    "{} '{}' → '{}'",
                    Msg::Tagged.text(lang),
                    response.keyword,
                    response.tag
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

/// Execute the by-tag command
pub async fn execute_by_tag(
    args: ByTagArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let tag = args.tag.trim().to_string();
    let resources = services.ranking.by_tag(&tag)?;

    let response = ByTagResponse {
        count: resources.len(),
        tag,
        resources,
    };

    match format {
        OutputFormat::Human => {
            if response.resources.is_empty() {
                println!(
                    "{} '{}'",
                    Msg::TagEmpty.text(lang),
                    colors::tag(&response.tag)
                );
            } else {
                println!(
                    "{} {}",
                    colors::label(Msg::TagHeader.text(lang)),
                    colors::tag(&response.tag)
                );
                for m in &response.resources {
                    println!(
                        "- {}: {}",
                        colors::keyword(&m.keyword),
                        colors::locator(&m.locator)
                    );
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
