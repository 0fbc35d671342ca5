//! Shortcut commands - open a named page, look up a phone number
//!
//! Both read fixed tables from configuration; neither touches the store
//! or the search history.

use crate::cli::messages::Msg;
use crate::cli::opener::LocatorOpener;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Shortcut name (colleges, graduate, research, admission, map, ...)
    pub name: String,
}

/// Arguments for the phone command
#[derive(Args, Debug)]
pub struct PhoneArgs {
    /// Department name
    #[arg(required = true, num_args = 1..)]
    pub department: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub name: String,
    pub locator: String,
    pub opened: bool,
}

#[derive(Debug, Serialize)]
pub struct PhoneResponse {
    pub department: String,
    pub phone: Option<String>,
}

/// Resolve a shortcut name against the configured table
pub fn resolve_shortcut<'a>(services: &'a Services, name: &str) -> Option<&'a str> {
    services
        .config
        .shortcuts
        .get(name.trim().to_lowercase().as_str())
        .map(String::as_str)
}

/// Resolve a department against the configured phone directory
pub fn resolve_phone<'a>(services: &'a Services, department: &str) -> Option<&'a str> {
    services
        .config
        .directory
        .get(department.trim())
        .map(String::as_str)
}

/// Execute the open command
pub async fn execute_open(
    args: OpenArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    opener: &dyn LocatorOpener,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let Some(locator) = resolve_shortcut(services, &args.name) else {
        return Err(format!("{} '{}'", Msg::UnknownShortcut.text(lang), args.name).into());
    };

    let opened = match opener.open(locator) {
        Ok(()) => opener.enabled(),
        Err(e) => {
            tracing::warn!("Failed to open shortcut {}: {}", args.name, e);
            output::print_warning(&format!("{} {e}", Msg::OpenFailed.text(lang)));
            false
        }
    };

    let response = OpenResponse {
        name: args.name,
        locator: locator.to_string(),
        opened,
    };

    match format {
        OutputFormat::Human => {
            let label = if response.opened {
                Msg::Opened
            } else {
                Msg::UrlLabel
            };
            println!(
                "{} {}",
                colors::label(label.text(lang)),
                colors::locator(&response.locator)
            );
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}

/// Execute the phone command
pub async fn execute_phone(
    args: PhoneArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = services.config.ui.language;
    let department = args.department.join(" ");
    let phone = resolve_phone(services, &department).map(str::to_string);

    let response = PhoneResponse { department, phone };

    match format {
        OutputFormat::Human => match &response.phone {
            Some(number) => println!(
                "{} {} {}",
                colors::keyword(&response.department),
                Msg::PhoneLabel.text(lang),
                colors::number(number)
            ),
            None => println!("{}", Msg::PhoneNotFound.text(lang)),
        },
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
