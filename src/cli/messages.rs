//! User-facing message sets (Korean and English).
//!
//! The language is always passed in explicitly; there is no
//! process-wide current language.

use crate::core::config::Language;

/// Message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Welcome,
    Help,
    Goodbye,
    SearchLabel,
    Suggest,
    NoMatch,
    KeywordsHeader,
    UrlLabel,
    Added,
    Duplicate,
    DeletePrompt,
    Deleted,
    KeywordNotFound,
    RecordsHeader,
    NoRecords,
    HistoryHeader,
    NoHistory,
    TopHeader,
    NoTop,
    TagKeywordPrompt,
    TagPrompt,
    Tagged,
    TagQueryPrompt,
    TagHeader,
    TagEmpty,
    DepartmentPrompt,
    PhoneLabel,
    PhoneNotFound,
    Opened,
    OpenFailed,
    UnknownShortcut,
    Reseeded,
    LanguageSwitched,
    Failed,
}

impl Msg {
    pub fn text(self, lang: Language) -> &'static str {
        use Language::{En, Ko};
        match (self, lang) {
            (Msg::Welcome, Ko) => "충북대 챗봇에 오신 것을 환영합니다!",
            (Msg::Welcome, En) => "Welcome to CBNU Bot!",
            (Msg::Help, Ko) => "검색 가능한 키워드 목록을 보려면 help를 입력하세요.",
            (Msg::Help, En) => "Type help to see available search keywords.",
            (Msg::Goodbye, Ko) => "안녕히 가세요!",
            (Msg::Goodbye, En) => "Goodbye!",
            (Msg::SearchLabel, Ko) => "검색어 입력:",
            (Msg::SearchLabel, En) => "Enter keyword:",
            (Msg::Suggest, Ko) => "혹시 다음 키워드를 찾으시나요?",
            (Msg::Suggest, En) => "Did you mean:",
            (Msg::NoMatch, Ko) => "일치하는 키워드가 없습니다.",
            (Msg::NoMatch, En) => "No matching keyword.",
            (Msg::KeywordsHeader, Ko) => "검색창에 입력할 수 있는 키워드 목록:",
            (Msg::KeywordsHeader, En) => "Keywords you can search for:",
            (Msg::UrlLabel, _) => "URL:",
            (Msg::Added, Ko) => "키워드를 추가했습니다:",
            (Msg::Added, En) => "Added keyword:",
            (Msg::Duplicate, Ko) => "키워드가 이미 존재합니다:",
            (Msg::Duplicate, En) => "Keyword already exists:",
            (Msg::DeletePrompt, Ko) => "삭제할 키워드:",
            (Msg::DeletePrompt, En) => "Keyword to delete:",
            (Msg::Deleted, Ko) => "키워드를 삭제했습니다:",
            (Msg::Deleted, En) => "Deleted keyword:",
            (Msg::KeywordNotFound, Ko) => "키워드를 찾을 수 없습니다:",
            (Msg::KeywordNotFound, En) => "Keyword not found:",
            (Msg::RecordsHeader, Ko) => "등록된 키워드 목록:",
            (Msg::RecordsHeader, En) => "Registered keywords:",
            (Msg::NoRecords, Ko) => "등록된 키워드가 없습니다.",
            (Msg::NoRecords, En) => "No keywords registered.",
            (Msg::HistoryHeader, Ko) => "최근 검색어:",
            (Msg::HistoryHeader, En) => "Recent searches:",
            (Msg::NoHistory, Ko) => "검색 기록이 없습니다.",
            (Msg::NoHistory, En) => "No search history.",
            (Msg::TopHeader, Ko) => "인기 키워드:",
            (Msg::TopHeader, En) => "Top keywords:",
            (Msg::NoTop, Ko) => "인기 키워드가 없습니다.",
            (Msg::NoTop, En) => "No popular keywords yet.",
            (Msg::TagKeywordPrompt, Ko) => "태그를 달 키워드:",
            (Msg::TagKeywordPrompt, En) => "Keyword to tag:",
            (Msg::TagPrompt, Ko) => "지정할 태그:",
            (Msg::TagPrompt, En) => "Tag:",
            (Msg::Tagged, Ko) => "태그를 지정했습니다:",
            (Msg::Tagged, En) => "Tagged:",
            (Msg::TagQueryPrompt, Ko) => "검색할 태그:",
            (Msg::TagQueryPrompt, En) => "Tag to list:",
            (Msg::TagHeader, Ko) => "태그 키워드:",
            (Msg::TagHeader, En) => "Keywords tagged:",
            (Msg::TagEmpty, Ko) => "해당 태그의 키워드가 없습니다:",
            (Msg::TagEmpty, En) => "No keywords under tag:",
            (Msg::DepartmentPrompt, Ko) => "부서명 입력:",
            (Msg::DepartmentPrompt, En) => "Department:",
            (Msg::PhoneLabel, Ko) => "전화번호:",
            (Msg::PhoneLabel, En) => "phone:",
            (Msg::PhoneNotFound, Ko) => "해당 부서 전화번호가 없습니다.",
            (Msg::PhoneNotFound, En) => "No phone number for that department.",
            (Msg::Opened, Ko) => "페이지를 열었습니다:",
            (Msg::Opened, En) => "Opened:",
            (Msg::OpenFailed, Ko) => "페이지 열기 오류:",
            (Msg::OpenFailed, En) => "Could not open:",
            (Msg::UnknownShortcut, Ko) => "알 수 없는 바로가기:",
            (Msg::UnknownShortcut, En) => "Unknown shortcut:",
            (Msg::Reseeded, Ko) => "초기 데이터로 재설정했습니다. 키워드 수:",
            (Msg::Reseeded, En) => "Reset to seed data. Keywords:",
            (Msg::LanguageSwitched, Ko) => "언어를 한국어로 바꿨습니다.",
            (Msg::LanguageSwitched, En) => "Language switched to English.",
            (Msg::Failed, Ko) => "오류:",
            (Msg::Failed, En) => "Error:",
        }
    }
}

/// "(검색 3회)" / "(3 hits)"
pub fn hits(count: u64, lang: Language) -> String {
    match lang {
        Language::Ko => format!("(검색 {count}회)"),
        Language::En => format!("({count} hits)"),
    }
}

/// " [태그: x]" / " [tag: x]", empty when untagged
pub fn tag_suffix(tag: &str, lang: Language) -> String {
    if tag.is_empty() {
        return String::new();
    }
    match lang {
        Language::Ko => format!(" [태그: {tag}]"),
        Language::En => format!(" [tag: {tag}]"),
    }
}
