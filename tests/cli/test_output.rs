//! Tests for output formatting helpers and message sets

use keylink::cli::messages::{hits, tag_suffix, Msg};
use keylink::cli::output::{format_match, format_ranked, format_record, format_suggestions};
use keylink::core::config::Language;
use keylink::{KeywordUsage, ResourceMatch, ResourceRecord, Suggestion};

fn plain(s: String) -> String {
    // Strip ANSI escapes in case colors are forced on
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_format_match() {
    let line = plain(format_match(&ResourceMatch::new("LMS", "https://lms")));
    assert_eq!(line, "[LMS] https://lms");
}

#[test]
fn test_format_record_untagged() {
    let record = ResourceRecord {
        keyword: "도서관".to_string(),
        locator: "https://a".to_string(),
        usage_count: 0,
        tag: String::new(),
    };
    assert_eq!(
        plain(format_record(&record, Language::Ko)),
        "- 도서관: https://a (검색 0회)"
    );
    assert_eq!(
        plain(format_record(&record, Language::En)),
        "- 도서관: https://a (0 hits)"
    );
}

#[test]
fn test_format_ranked() {
    let usage = KeywordUsage {
        keyword: "LMS".to_string(),
        usage_count: 3,
    };
    assert_eq!(
        plain(format_ranked(1, &usage, Language::Ko)),
        "1. LMS (검색 3회)"
    );
}

#[test]
fn test_format_suggestions_by_language() {
    let suggestions = vec![Suggestion {
        keyword: "도서관".to_string(),
        similarity: 0.67,
    }];
    assert_eq!(
        plain(format_suggestions(&suggestions, Language::Ko)),
        format!("{} 도서관", Msg::Suggest.text(Language::Ko))
    );
}

#[test]
fn test_message_helpers() {
    assert_eq!(hits(2, Language::En), "(2 hits)");
    assert_eq!(tag_suffix("학습", Language::En), " [tag: 학습]");
    assert_eq!(Msg::UrlLabel.text(Language::Ko), Msg::UrlLabel.text(Language::En));
}
