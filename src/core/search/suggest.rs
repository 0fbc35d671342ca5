//! Close-match suggestions.
//!
//! Similarity is the classic sequence-matcher ratio: find the longest
//! common contiguous block, recurse on the pieces to its left and
//! right, and score `2 * M / T` where `M` is the number of matched
//! characters and `T` the combined length. Scores agree with Python's
//! `difflib.SequenceMatcher(None, candidate, query).ratio()`.

use crate::core::types::Suggestion;
use std::collections::HashMap;

/// Default minimum similarity for a suggestion
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Default number of suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Sequences at least this long get the popular-element heuristic
const AUTOJUNK_MIN_LEN: usize = 200;

struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, popular characters removed
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest block with `a[i..i+k] == b[j..j+k]` inside the given ranges.
    ///
    /// Among equally long blocks the one starting earliest in `a`, then
    /// earliest in `b`, wins.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular characters were dropped from b2j; grow across them
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }

    /// Total characters covered by the matching blocks
    fn matched_len(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }
}

/// Similarity ratio of `candidate` against `query`, in [0, 1].
///
/// Two empty strings are identical (1.0).
pub fn similarity(candidate: &str, query: &str) -> f64 {
    let a: Vec<char> = candidate.chars().collect();
    let b: Vec<char> = query.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = SequenceMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

/// Up to `n` candidates scoring at least `cutoff` against `query`.
///
/// Ordered by descending similarity; ties keep the order in which the
/// candidates were supplied.
pub fn close_matches<I, S>(query: &str, candidates: I, n: usize, cutoff: f64) -> Vec<Suggestion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Suggestion> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let keyword = candidate.as_ref();
            let score = similarity(keyword, query);
            (score >= cutoff).then(|| Suggestion {
                keyword: keyword.to_string(),
                similarity: score,
            })
        })
        .collect();

    // sort_by is stable, so equal scores stay in input order
    scored.sort_by(|x, y| y.similarity.total_cmp(&x.similarity));
    scored.truncate(n);
    scored
}

/// Suggestions with the default limit (3) and cutoff (0.6)
pub fn suggest<I, S>(query: &str, universe: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    close_matches(query, universe, DEFAULT_MAX_SUGGESTIONS, DEFAULT_CUTOFF)
}
