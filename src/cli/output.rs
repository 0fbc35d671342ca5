//! Output formatting for CLI commands
//!
//! Human-readable or JSON output. Colors respect NO_COLOR.

use crate::cli::messages::{self, Msg};
use crate::core::config::Language;
use crate::core::types::{KeywordUsage, ResourceMatch, ResourceRecord, Suggestion};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for keywords
    pub fn keyword(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for locators
    pub fn locator(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for tags
    pub fn tag(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// "[keyword] locator"
pub fn format_match(m: &ResourceMatch) -> String {
    format!(
        "[{}] {}",
        colors::keyword(&m.keyword),
        colors::locator(&m.locator)
    )
}

/// "- keyword: locator (검색 N회) [태그: t]"
pub fn format_record(record: &ResourceRecord, lang: Language) -> String {
    format!(
        "- {}: {} {}{}",
        colors::keyword(&record.keyword),
        colors::locator(&record.locator),
        colors::dim(&messages::hits(record.usage_count, lang)),
        colors::tag(&messages::tag_suffix(&record.tag, lang))
    )
}

/// "1. keyword (검색 N회)"
pub fn format_ranked(rank: usize, usage: &KeywordUsage, lang: Language) -> String {
    format!(
        "{}. {} {}",
        colors::rank(&rank.to_string()),
        colors::keyword(&usage.keyword),
        colors::number(&messages::hits(usage.usage_count, lang))
    )
}

/// "Did you mean: a, b, c"
pub fn format_suggestions(suggestions: &[Suggestion], lang: Language) -> String {
    let keywords: Vec<String> = suggestions
        .iter()
        .map(|s| colors::keyword(&s.keyword).to_string())
        .collect();
    format!("{} {}", Msg::Suggest.text(lang), keywords.join(", "))
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
