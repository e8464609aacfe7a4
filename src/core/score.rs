//! # Fuzzy Scorer
//!
//! Scores a candidate line against the typed query. The query must appear
//! as an in-order subsequence of the candidate; among all the ways it can
//! be placed, the best-scoring placement wins.
//!
//! ```text
//! score("a_ab", "ab")
//!          ├── a@0, b@3          weights only
//!          └── a@2, b@3          word-boundary 'a' + contiguous 'b'  ← max
//! ```
//!
//! Per-character weight is 1, plus a one-time bonus of 3 when the character
//! starts a word (string start, follows a non-alphanumeric character, or is
//! uppercase). Adjacent matched characters earn a contiguity bonus of 2.
//! The result is normalized by the best score the candidate could ever
//! produce, so a full exact match is exactly 1.0.
//!
//! Matching is case-sensitive: the uppercase boundary bonus rewards
//! camel-case words, but query characters must literally equal candidate
//! characters. `score("Foo", "foo")` is 0.

/// Bonus weight for a character that starts a word.
const BOUNDARY_BONUS: f64 = 3.0;

/// Bonus weight for a matched character adjacent to the previous match.
const CONTIGUOUS_BONUS: f64 = 2.0;

/// Match quality of `query` against `text`, in [0, 1].
///
/// 1.0 for an exact match or an empty query; 0.0 when `query` is not an
/// in-order subsequence of `text`.
pub fn score(text: &str, query: &str) -> f64 {
    if query.is_empty() || text == query {
        return 1.0;
    }

    let text: Vec<char> = text.chars().collect();
    let query: Vec<char> = query.chars().collect();
    if query.len() > text.len() {
        return 0.0;
    }

    let weights = char_weights(&text);
    let max_possible: f64 =
        weights.iter().sum::<f64>() + CONTIGUOUS_BONUS * (text.len() - 1) as f64;

    match best_alignment(&text, &query, &weights) {
        Some(best) => best / max_possible,
        None => 0.0,
    }
}

/// Per-character weight: base 1, plus the word-boundary bonus.
///
/// The bonus applies at most once per character, no matter how many of the
/// boundary rules fire for it.
fn char_weights(text: &[char]) -> Vec<f64> {
    text.iter()
        .enumerate()
        .map(|(i, &c)| {
            let boundary = i == 0 || c.is_uppercase() || !text[i - 1].is_alphanumeric();
            if boundary { 1.0 + BOUNDARY_BONUS } else { 1.0 }
        })
        .collect()
}

/// Best absolute score over every subsequence placement of `query` in
/// `text`, or `None` when no placement exists.
///
/// Walks the query back to front, keeping for each text index the best
/// score achievable when the current query character is matched exactly
/// there. The contiguity bonus only depends on whether the next query
/// character sits on the adjacent index, so a suffix maximum over the
/// previous row covers every non-adjacent continuation without
/// enumerating placements.
fn best_alignment(text: &[char], query: &[char], weights: &[f64]) -> Option<f64> {
    let n = text.len();
    let mut next: Vec<Option<f64>> = Vec::new();

    for (qi, &qc) in query.iter().enumerate().rev() {
        let mut row: Vec<Option<f64>> = vec![None; n];

        if qi == query.len() - 1 {
            for j in 0..n {
                if text[j] == qc {
                    row[j] = Some(weights[j]);
                }
            }
        } else {
            // suffix_best[j] = best continuation at any index >= j
            let mut suffix_best: Vec<Option<f64>> = vec![None; n + 1];
            for j in (0..n).rev() {
                suffix_best[j] = max_opt(next[j], suffix_best[j + 1]);
            }

            for j in 0..n {
                if text[j] != qc {
                    continue;
                }
                let adjacent = next.get(j + 1).copied().flatten().map(|s| s + CONTIGUOUS_BONUS);
                let anywhere = if j + 1 < n { suffix_best[j + 1] } else { None };
                if let Some(follow) = max_opt(adjacent, anywhere) {
                    row[j] = Some(weights[j] + follow);
                }
            }
        }

        next = row;
    }

    next.into_iter().flatten().fold(None, |best, v| max_opt(best, Some(v)))
}

fn max_opt(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}
