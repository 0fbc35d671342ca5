//! History command - recent searches

use crate::cli::messages::Msg;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries (defaults to history.recent_limit)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub queries: Vec<String>,
}

/// Execute the history command
pub async fn execute(
    args: HistoryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let queries = services.recent_history(args.limit)?;

    let response = HistoryResponse {
        count: queries.len(),
        queries,
    };

    match format {
        OutputFormat::Human => {
            if response.queries.is_empty() {
                println!("{}", Msg::NoHistory.text(lang));
            } else {
                output::print_header(Msg::HistoryHeader.text(lang));
                for query in &response.queries {
                    println!("- {query}");
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
