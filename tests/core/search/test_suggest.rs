//! Suggestion tests over the public helpers and the search service

use crate::common::{campus_seed, create_test_services};
use keylink::core::search::{close_matches, similarity, suggest};

#[test]
fn test_threshold_is_respected() {
    let universe = ["도서관", "기숙사", "등록금", "LMS"];
    for s in close_matches("도서간", universe, 3, 0.6) {
        assert!(s.similarity >= 0.6, "{} scored {}", s.keyword, s.similarity);
    }
    assert!(close_matches("도서간", universe, 3, 0.7).is_empty());
}

#[test]
fn test_limit_is_respected() {
    let universe = ["abcd", "abce", "abcf", "abcg", "abch"];
    let suggestions = close_matches("abcx", universe, 3, 0.6);
    assert_eq!(suggestions.len(), 3);
    // Equal scores keep input order
    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["abcd", "abce", "abcf"]);
}

#[test]
fn test_best_match_comes_first() {
    let suggestions = suggest("LSM", ["LM", "LMS", "마이페이지"]);
    assert_eq!(suggestions[0].keyword, "LM");
    assert_eq!(suggestions[1].keyword, "LMS");
    assert!(suggestions[0].similarity > suggestions[1].similarity);
}

#[test]
fn test_similarity_bounds() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("도서관", "도서관"), 1.0);
    assert_eq!(similarity("도서관", "LMS"), 0.0);
    assert_eq!(similarity("", "LMS"), 0.0);
}

#[test]
fn test_empty_universe_or_query() {
    let empty: [&str; 0] = [];
    assert!(suggest("도서관", empty).is_empty());
    assert!(suggest("", ["도서관"]).is_empty());
}

#[test]
fn test_service_suggests_from_store() {
    let (services, _env) = create_test_services(campus_seed());

    let suggestions = services.search.suggest("장학굼").unwrap();
    assert_eq!(suggestions[0].keyword, "장학금");

    // Suggesting never changes counts
    let records = services.store.list_all().unwrap();
    assert!(records.iter().all(|r| r.usage_count == 0));
}
