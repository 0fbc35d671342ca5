//! Search and lookup tests

use crate::common::{create_test_services, small_seed, test_config, TestEnv};
use keylink::{KeylinkError, LookupOutcome, ResourceMatch, SeedEntry, Services};

fn usage(services: &Services, keyword: &str) -> u64 {
    services.store.get(keyword).unwrap().unwrap().usage_count
}

#[test]
fn test_search_counts_the_match() {
    let seed = vec![
        SeedEntry::new("도서관", "https://a"),
        SeedEntry::new("기숙사", "https://b"),
    ];
    let (services, _env) = create_test_services(seed);

    let matches = services.search.search("도서").unwrap();
    assert_eq!(matches, vec![ResourceMatch::new("도서관", "https://a")]);
    assert_eq!(usage(&services, "도서관"), 1);
    assert_eq!(usage(&services, "기숙사"), 0);
}

#[test]
fn test_counts_grow_by_one_per_call() {
    let (services, _env) = create_test_services(small_seed());

    for expected in 1..=4 {
        services.search.search("LMS").unwrap();
        assert_eq!(usage(&services, "LMS"), expected);
    }
}

#[test]
fn test_every_matched_keyword_is_counted() {
    let seed = vec![
        SeedEntry::new("학사일정", "https://a"),
        SeedEntry::new("학사지원", "https://b"),
        SeedEntry::new("기숙사", "https://c"),
    ];
    let (services, _env) = create_test_services(seed);

    let matches = services.search.search("학사").unwrap();
    let keywords: Vec<&str> = matches.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["학사일정", "학사지원"]);
    assert_eq!(usage(&services, "학사일정"), 1);
    assert_eq!(usage(&services, "학사지원"), 1);
    assert_eq!(usage(&services, "기숙사"), 0);
}

#[test]
fn test_blank_query_matches_nothing() {
    let (services, _env) = create_test_services(small_seed());

    for blank in ["", "   ", "\t\n"] {
        assert!(services.search.search(blank).unwrap().is_empty());
        assert_eq!(services.search.lookup(blank).unwrap(), LookupOutcome::NoMatch);
    }

    let records = services.store.list_all().unwrap();
    assert!(records.iter().all(|r| r.usage_count == 0));
    assert!(services.recent_history(None).unwrap().is_empty());
}

#[test]
fn test_query_is_trimmed() {
    let (services, _env) = create_test_services(small_seed());
    let matches = services.search.search("  기숙  ").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].keyword, "기숙사");
}

#[test]
fn test_overlong_query_is_rejected() {
    let (services, _env) = create_test_services(small_seed());
    let query = "가".repeat(201);
    assert!(matches!(
        services.search.search(&query),
        Err(KeylinkError::InvalidInput(_))
    ));

    let at_limit = "가".repeat(200);
    assert!(services.search.search(&at_limit).unwrap().is_empty());
}

#[test]
fn test_lookup_hit_logs_and_counts() {
    let (services, _env) = create_test_services(small_seed());

    let outcome = services.search.lookup("도서").unwrap();
    assert!(outcome.is_hit());
    assert_eq!(outcome.matches()[0].keyword, "도서관");
    assert_eq!(usage(&services, "도서관"), 1);
    assert_eq!(services.recent_history(None).unwrap(), vec!["도서"]);
}

#[test]
fn test_lookup_miss_suggests_without_counting() {
    let (services, _env) = create_test_services(small_seed());

    let outcome = services.search.lookup("도서간").unwrap();
    match outcome {
        LookupOutcome::Suggestions(suggestions) => {
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].keyword, "도서관");
        }
        other => panic!("expected suggestions, got {other:?}"),
    }

    let records = services.store.list_all().unwrap();
    assert!(records.iter().all(|r| r.usage_count == 0));
    assert_eq!(services.recent_history(None).unwrap(), vec!["도서간"]);
}

#[test]
fn test_lookup_with_nothing_close() {
    let (services, _env) = create_test_services(small_seed());
    assert_eq!(
        services.search.lookup("셔틀버스").unwrap(),
        LookupOutcome::NoMatch
    );
    // Misses are still logged
    assert_eq!(services.recent_history(None).unwrap(), vec!["셔틀버스"]);
}

#[test]
fn test_lookup_survives_unwritable_history() {
    let env = TestEnv::new();
    let mut config = test_config(&env, small_seed());
    config.history.path = env.dir.path().to_path_buf();
    let services = Services::start(config).unwrap();

    let outcome = services.search.lookup("LMS").unwrap();
    assert!(outcome.is_hit());
    assert_eq!(usage(&services, "LMS"), 1);
}

#[test]
fn test_case_insensitive_setting() {
    let env = TestEnv::new();
    let mut config = test_config(&env, small_seed());
    config.search.case_sensitive = false;
    let services = Services::start(config).unwrap();

    let matches = services.search.search("lms").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(usage(&services, "LMS"), 1);
}

#[test]
fn test_failed_count_update_rolls_back_all_counts() {
    let seed = vec![
        SeedEntry::new("학사일정", "https://a"),
        SeedEntry::new("학사지원", "https://b"),
    ];
    let (services, env) = create_test_services(seed);

    let conn = rusqlite::Connection::open(env.db_path()).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER fail_second_update BEFORE UPDATE ON resources
         WHEN NEW.keyword = '학사지원'
         BEGIN SELECT RAISE(ABORT, 'disk gone'); END;",
    )
    .unwrap();

    assert!(matches!(
        services.search.search("학사"),
        Err(KeylinkError::StorageUnavailable(_))
    ));
    assert_eq!(usage(&services, "학사일정"), 0);
    assert_eq!(usage(&services, "학사지원"), 0);
}

#[test]
fn test_rejected_lookup_is_not_logged() {
    let (services, _env) = create_test_services(small_seed());

    let query = "x".repeat(300);
    assert!(matches!(
        services.search.lookup(&query),
        Err(KeylinkError::InvalidInput(_))
    ));
    assert!(services.recent_history(None).unwrap().is_empty());
}
