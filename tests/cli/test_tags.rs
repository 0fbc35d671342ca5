//! Tests for tag and by-tag commands

use crate::cli::test_helpers::create_cli_test_services;
use keylink::cli::commands::tags::{execute_by_tag, execute_tag, ByTagArgs, TagArgs};
use keylink::cli::OutputFormat;

#[tokio::test]
async fn test_tag_then_list_by_tag() {
    let (services, _env) = create_cli_test_services();

    let args = TagArgs {
        keyword: "기숙사".to_string(),
        tag: "생활".to_string(),
    };
    assert!(execute_tag(args, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert_eq!(services.store.get("기숙사").unwrap().unwrap().tag, "생활");

    let args = ByTagArgs {
        tag: "생활".to_string(),
    };
    assert!(execute_by_tag(args, &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_tag_unknown_keyword_changes_nothing() {
    let (services, _env) = create_cli_test_services();

    let args = TagArgs {
        keyword: "없음".to_string(),
        tag: "생활".to_string(),
    };
    assert!(execute_tag(args, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(services.ranking.by_tag("생활").unwrap().is_empty());
}

#[tokio::test]
async fn test_by_tag_empty() {
    let (services, _env) = create_cli_test_services();
    let args = ByTagArgs {
        tag: "없는태그".to_string(),
    };
    assert!(execute_by_tag(args, &services, OutputFormat::Human)
        .await
        .is_ok());
}
