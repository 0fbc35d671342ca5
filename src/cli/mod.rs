//! CLI adapter for keylink
//!
//! One-shot subcommands for scripting plus an interactive shell (the
//! default when no subcommand is given). Both go through the same
//! [`Services`](crate::core::services::Services) container.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | commands + shell |
//!              +------------------+
//! ```

pub mod commands;
pub mod messages;
pub mod opener;
pub mod output;
pub mod shell;

use clap::{Parser, Subcommand};

/// keylink - keyword lookup assistant
///
/// Type a keyword (or part of one) to open the matching page. Misses get
/// "did you mean" suggestions; every lookup is logged and counted.
#[derive(Parser, Debug)]
#[command(name = "keylink")]
#[command(version)]
#[command(about = "Keyword lookup assistant", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print matched locators without opening them
    #[arg(long, global = true)]
    pub no_open: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a keyword, open the matches or suggest close keywords
    Search(commands::SearchArgs),

    /// Add a keyword and its locator
    Add(commands::AddArgs),

    /// Delete a keyword
    Delete(commands::DeleteArgs),

    /// List every record with usage count and tag
    List(commands::ListArgs),

    /// Set the tag of a keyword
    Tag(commands::TagArgs),

    /// List the keywords under a tag
    #[command(name = "by-tag", alias = "cat")]
    ByTag(commands::ByTagArgs),

    /// Most-used keywords
    Top(commands::TopArgs),

    /// Recent searches
    History(commands::HistoryArgs),

    /// List searchable keywords
    Keywords(commands::KeywordsArgs),

    /// Open a named shortcut page
    Open(commands::OpenArgs),

    /// Look up a department's phone number
    Phone(commands::PhoneArgs),

    /// Replace every record with the seed list
    Reset(commands::ResetArgs),

    /// Interactive session (default)
    Shell,

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  keylink completions bash > ~/.local/share/bash-completion/completions/keylink
    ///   zsh:   keylink completions zsh > ~/.zfunc/_keylink
    ///   fish:  keylink completions fish > ~/.config/fish/completions/keylink.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Some(Commands::Completions(args)) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::start(config)?);
    let boxed_opener = opener::select(services.config.ui.open_on_match && !cli.no_open);
    let opener: &dyn opener::LocatorOpener = boxed_opener.as_ref();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Search(args) => {
            commands::search::execute(args, &services, cli.format, opener).await
        }
        Commands::Add(args) => commands::resources::execute_add(args, &services, cli.format).await,
        Commands::Delete(args) => {
            commands::resources::execute_delete(args, &services, cli.format).await
        }
        Commands::List(args) => {
            commands::resources::execute_list(args, &services, cli.format).await
        }
        Commands::Tag(args) => commands::tags::execute_tag(args, &services, cli.format).await,
        Commands::ByTag(args) => commands::tags::execute_by_tag(args, &services, cli.format).await,
        Commands::Top(args) => commands::ranking::execute(args, &services, cli.format).await,
        Commands::History(args) => commands::history::execute(args, &services, cli.format).await,
        Commands::Keywords(args) => {
            commands::resources::execute_keywords(args, &services, cli.format).await
        }
        Commands::Open(args) => {
            commands::shortcuts::execute_open(args, &services, cli.format, opener).await
        }
        Commands::Phone(args) => {
            commands::shortcuts::execute_phone(args, &services, cli.format).await
        }
        Commands::Reset(args) => {
            commands::resources::execute_reset(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = shell::Shell::new(&services, opener, stdin.lock(), stdout.lock());
            session.run()?;
            Ok(())
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
