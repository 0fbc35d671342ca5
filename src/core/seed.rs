//! Built-in data sets: the default seed list, shortcut locators, and the
//! department phone directory.
//!
//! All three can be replaced from the config file.

use crate::core::types::SeedEntry;
use std::collections::BTreeMap;

/// Default keyword → locator pairs applied on every reseed
pub const DEFAULT_SEED: &[(&str, &str)] = &[
    ("장학금", "https://www.cbnu.ac.kr/www/contents.do?key=492"),
    (
        "학사일정",
        "https://www.cbnu.ac.kr/www/selectWebSchdulList.do?key=455&schdulSeNo=1",
    ),
    ("수강신청", "https://eisa.cbnu.ac.kr/"),
    ("도서관", "https://cbnul.chungbuk.ac.kr/"),
    ("셔틀버스", "https://www.cbnu.ac.kr/www/contents.do?key=648"),
    ("기숙사", "https://cia.cbnu.ac.kr/"),
    ("취업지원", "https://hrd.cbnu.ac.kr/"),
    ("등록금", "https://www.cbnu.ac.kr/www/contents.do?key=483"),
    ("캠퍼스맵", "https://www.cbnu.ac.kr/www/contents.do?key=4"),
    ("씨앗시스템", "https://seet.cbnu.ac.kr/"),
    ("LMS", "https://lms.cbnu.ac.kr/"),
    ("마이페이지", "https://portal.cbnu.ac.kr/"),
];

const DEFAULT_SHORTCUTS: &[(&str, &str)] = &[
    ("colleges", "https://www.cbnu.ac.kr/www/index.do"),
    ("graduate", "https://graduate.chungbuk.ac.kr/"),
    ("research", "https://www.cbnu.ac.kr/www/contents.do?key=438"),
    ("admission", "https://www.cbnu.ac.kr/www/contents.do?key=395"),
    ("map", "https://www.cbnu.ac.kr/www/contents.do?key=4"),
];

const DEFAULT_DIRECTORY: &[(&str, &str)] = &[
    ("정보통신공학부", "043-261-2101"),
    ("학생지원팀", "043-261-2114"),
    ("도서관", "043-261-2154"),
    ("교환학생센터", "043-261-3624"),
    ("교무팀", "043-261-2110"),
    ("입학처", "043-261-2105"),
    ("학사지원팀", "043-261-2130"),
    ("국제교류본부", "043-261-3299"),
    ("취업지원센터", "043-261-3661"),
    ("학생생활관", "043-261-2005"),
];

/// Default seed list as owned entries
pub fn default_seed() -> Vec<SeedEntry> {
    DEFAULT_SEED.iter().copied().map(SeedEntry::from).collect()
}

/// Default shortcut name → locator table
pub fn default_shortcuts() -> BTreeMap<String, String> {
    to_map(DEFAULT_SHORTCUTS)
}

/// Default department → phone number table
pub fn default_directory() -> BTreeMap<String, String> {
    to_map(DEFAULT_DIRECTORY)
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
