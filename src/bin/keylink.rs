//! keylink - keyword lookup assistant
//!
//! # Examples
//!
//! ```bash
//! # Interactive session
//! keylink
//!
//! # Look up a keyword without opening a browser
//! keylink --no-open search 도서
//!
//! # Add, tag, and list keywords
//! keylink add 식당 https://www.cbnu.ac.kr/www/contents.do?key=30
//! keylink tag 식당 생활
//! keylink cat 생활
//!
//! # Most-used keywords as JSON
//! keylink --format json top -n 3
//! ```

use clap::Parser;
use keylink::cli::output::print_error;
use keylink::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool, json: bool) {
    let default_filter = if verbose { "keylink=debug" } else { "keylink=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    tracing::debug!("keylink {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
