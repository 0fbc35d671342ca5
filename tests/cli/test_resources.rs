//! Tests for add/delete/list/keywords/reset commands

use crate::cli::test_helpers::create_cli_test_services;
use keylink::cli::commands::resources::{
    execute_add, execute_delete, execute_keywords, execute_list, execute_reset, AddArgs,
    DeleteArgs, KeywordsArgs, ListArgs, ResetArgs,
};
use keylink::cli::OutputFormat;

#[tokio::test]
async fn test_add_new_keyword() {
    let (services, _env) = create_cli_test_services();
    let args = AddArgs {
        keyword: " 식당 ".to_string(),
        locator: "https://food.example.org/".to_string(),
    };

    let result = execute_add(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Add should succeed: {:?}", result.err());

    let record = services.store.get("식당").unwrap().unwrap();
    assert_eq!(record.locator, "https://food.example.org/");
    assert_eq!(record.usage_count, 0);
}

#[tokio::test]
async fn test_add_duplicate_fails() {
    let (services, _env) = create_cli_test_services();
    let args = AddArgs {
        keyword: "LMS".to_string(),
        locator: "https://other.example.org/".to_string(),
    };

    let result = execute_add(args, &services, OutputFormat::Json).await;
    assert!(result.is_err());
    assert_eq!(
        services.store.get("LMS").unwrap().unwrap().locator,
        "https://lms.example.org/"
    );
}

#[tokio::test]
async fn test_delete_existing_and_missing() {
    let (services, _env) = create_cli_test_services();

    let args = DeleteArgs {
        keyword: "기숙사".to_string(),
    };
    assert!(execute_delete(args, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(services.store.get("기숙사").unwrap().is_none());

    // Unknown keyword is reported, not an error
    let args = DeleteArgs {
        keyword: "기숙사".to_string(),
    };
    assert!(execute_delete(args, &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_and_keywords() {
    let (services, _env) = create_cli_test_services();

    assert!(execute_list(ListArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute_list(ListArgs {}, &services, OutputFormat::Json)
        .await
        .is_ok());
    assert!(
        execute_keywords(KeywordsArgs {}, &services, OutputFormat::Human)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_list_empty_store() {
    let (services, _env) = create_cli_test_services();
    for keyword in services.store.all_keywords().unwrap() {
        services.store.remove(&keyword).unwrap();
    }
    assert!(execute_list(ListArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_reset_restores_seed() {
    let (services, _env) = create_cli_test_services();
    services.store.remove("LMS").unwrap();
    services.search.search("도서관").unwrap();

    assert!(execute_reset(ResetArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());

    assert_eq!(services.store.count().unwrap(), 3);
    assert_eq!(
        services.store.get("도서관").unwrap().unwrap().usage_count,
        0
    );
}
