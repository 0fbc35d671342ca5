//! Top command - most-used keywords

use crate::cli::messages::Msg;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::KeywordUsage;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the top command
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Number of keywords (defaults to ranking.top_n)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TopResponse {
    pub count: usize,
    pub keywords: Vec<KeywordUsage>,
}

/// Execute the top command
pub async fn execute(
    args: TopArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let keywords = services.ranking.top_keywords(args.limit)?;

    let response = TopResponse {
        count: keywords.len(),
        keywords,
    };

    match format {
        OutputFormat::Human => {
            if response.keywords.is_empty() {
                println!("{}", Msg::NoTop.text(lang));
            } else {
                output::print_header(Msg::TopHeader.text(lang));
                for (i, usage) in response.keywords.iter().enumerate() {
                    println!("{}", output::format_ranked(i + 1, usage, lang));
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
