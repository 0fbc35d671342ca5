//! Tests for the search command
//!
//! - Hits open every matched locator and bump counts
//! - Misses open nothing
//! - Opener failures do not fail the command

use crate::cli::test_helpers::{create_cli_test_services, FailingOpener, RecordingOpener};
use keylink::cli::commands::search::{execute, open_matches, SearchArgs};
use keylink::cli::opener::NoopOpener;
use keylink::cli::OutputFormat;
use keylink::{LookupOutcome, ResourceMatch};

fn args(words: &[&str]) -> SearchArgs {
    SearchArgs {
        query: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_search_hit_opens_locator() {
    let (services, _env) = create_cli_test_services();
    let opener = RecordingOpener::default();

    let result = execute(args(&["도서"]), &services, OutputFormat::Human, &opener).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());

    assert_eq!(
        *opener.opened.borrow(),
        vec!["https://library.example.org/".to_string()]
    );
    assert_eq!(
        services.store.get("도서관").unwrap().unwrap().usage_count,
        1
    );
}

#[tokio::test]
async fn test_search_json_format() {
    let (services, _env) = create_cli_test_services();
    let opener = RecordingOpener::default();

    let result = execute(args(&["LMS"]), &services, OutputFormat::Json, &opener).await;
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
    assert_eq!(opener.opened.borrow().len(), 1);
}

#[tokio::test]
async fn test_search_miss_opens_nothing() {
    let (services, _env) = create_cli_test_services();
    let opener = RecordingOpener::default();

    let result = execute(args(&["도서간"]), &services, OutputFormat::Human, &opener).await;
    assert!(result.is_ok());
    assert!(opener.opened.borrow().is_empty());
}

#[tokio::test]
async fn test_search_words_are_joined() {
    let (services, _env) = create_cli_test_services();
    services
        .store
        .insert("셔틀 버스", "https://bus.example.org/")
        .unwrap();
    let opener = RecordingOpener::default();

    execute(args(&["셔틀", "버스"]), &services, OutputFormat::Human, &opener)
        .await
        .unwrap();
    assert_eq!(
        *opener.opened.borrow(),
        vec!["https://bus.example.org/".to_string()]
    );
}

#[tokio::test]
async fn test_search_overlong_query_fails() {
    let (services, _env) = create_cli_test_services();
    let opener = RecordingOpener::default();
    let long = "x".repeat(500);

    let result = execute(args(&[&long]), &services, OutputFormat::Human, &opener).await;
    assert!(result.is_err());
}

#[test]
fn test_open_matches_skips_failures() {
    let outcome = LookupOutcome::Matches(vec![
        ResourceMatch::new("a", "https://a"),
        ResourceMatch::new("b", "https://b"),
    ]);
    assert!(open_matches(&outcome, &FailingOpener).is_empty());

    let opener = RecordingOpener::default();
    assert_eq!(
        open_matches(&outcome, &opener),
        vec!["https://a".to_string(), "https://b".to_string()]
    );
    assert!(open_matches(&LookupOutcome::NoMatch, &opener).is_empty());
}

#[test]
fn test_disabled_opener_reports_nothing_opened() {
    let outcome = LookupOutcome::Matches(vec![ResourceMatch::new("a", "https://a")]);
    assert!(open_matches(&outcome, &NoopOpener).is_empty());
}

#[tokio::test]
async fn test_search_with_opening_disabled() {
    let (services, _env) = create_cli_test_services();

    let result = execute(args(&["LMS"]), &services, OutputFormat::Json, &NoopOpener).await;
    assert!(result.is_ok());
    // The lookup still counts even though nothing was opened
    assert_eq!(services.store.get("LMS").unwrap().unwrap().usage_count, 1);
}
