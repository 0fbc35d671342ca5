//! Search history log tests

use crate::common::TestEnv;
use keylink::{KeylinkError, SearchHistory};

#[test]
fn test_recent_returns_tail_oldest_first() {
    let env = TestEnv::new();
    let history = SearchHistory::new(env.history_path());

    for q in ["도서관", "LMS", "기숙사", "장학금"] {
        history.append(q).unwrap();
    }

    assert_eq!(history.recent(2).unwrap(), vec!["기숙사", "장학금"]);
    assert_eq!(history.recent(10).unwrap().len(), 4);
    assert!(history.recent(0).unwrap().is_empty());
}

#[test]
fn test_missing_log_is_empty() {
    let env = TestEnv::new();
    let history = SearchHistory::new(env.dir.path().join("never-written.txt"));
    assert!(history.recent(10).unwrap().is_empty());
}

#[test]
fn test_append_keeps_one_query_per_line() {
    let env = TestEnv::new();
    let history = SearchHistory::new(env.history_path());

    history.append("도서\n관").unwrap();
    history.append("LMS").unwrap();

    let contents = std::fs::read_to_string(env.history_path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert_eq!(history.recent(5).unwrap(), vec!["도서 관", "LMS"]);
}

#[test]
fn test_append_creates_parent_directory() {
    let env = TestEnv::new();
    let path = env.dir.path().join("state").join("nested").join("history.txt");
    let history = SearchHistory::new(&path);

    history.append("셔틀버스").unwrap();
    assert!(path.exists());
}

#[test]
fn test_unwritable_log_reports_error() {
    let env = TestEnv::new();
    // A directory cannot be opened for appending
    let history = SearchHistory::new(env.dir.path());
    assert!(matches!(
        history.append("도서관"),
        Err(KeylinkError::HistoryLogUnwritable(_))
    ));
}
