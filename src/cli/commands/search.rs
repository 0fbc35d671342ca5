//! Search command - look up a keyword and open what matches

use crate::cli::messages::Msg;
use crate::cli::opener::LocatorOpener;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::LookupOutcome;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword or part of one (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub outcome: LookupOutcome,
    pub opened: Vec<String>,
}

/// Open every matched locator, returning the ones that opened.
///
/// Empty when the opener is disabled.
pub fn open_matches(outcome: &LookupOutcome, opener: &dyn LocatorOpener) -> Vec<String> {
    let mut opened = Vec::new();
    if !opener.enabled() {
        return opened;
    }
    for m in outcome.matches() {
        match opener.open(&m.locator) {
            Ok(()) => opened.push(m.locator.clone()),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", m.locator, e);
                output::print_warning(&format!("could not open {}: {e}", m.locator));
            }
        }
    }
    opened
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    opener: &dyn LocatorOpener,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.join(" ");
    let lang = services.config.ui.language;

    let outcome = services.search.lookup(&query)?;
    let opened = open_matches(&outcome, opener);

    let response = SearchResponseOutput {
        query,
        outcome,
        opened,
    };

    match format {
        OutputFormat::Human => match &response.outcome {
            LookupOutcome::Matches(matches) => {
                for m in matches {
                    println!("{}", output::format_match(m));
                }
            }
            LookupOutcome::Suggestions(suggestions) => {
                println!("{}", output::format_suggestions(suggestions, lang));
            }
            LookupOutcome::NoMatch => {
                println!(
                    "{} {}",
                    Msg::NoMatch.text(lang),
                    colors::dim(&response.query)
                );
            }
        },
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
