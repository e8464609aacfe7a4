//! # Search State
//!
//! The whole interactive session is a fold over keystrokes:
//!
//! ```text
//! Search + Key  →  update()  →  new Search
//! ```
//!
//! `Search` is an immutable value. Every transition returns a fresh
//! instance instead of mutating in place, so any session can be replayed
//! key by key in a test without a terminal. Candidates live behind an
//! `Arc<[String]>`, which keeps the per-keystroke copy cheap.
//!
//! Ranked matches are recomputed from scratch on every transition; scores
//! are never cached across queries.

use std::sync::Arc;

use crate::core::score::score;

/// A decoded keystroke, already stripped of terminal details.
///
/// `Cancel` is special: the session loop aborts on it directly rather
/// than routing it through `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Down,
    Up,
    Backspace,
    DeleteWord,
    Confirm,
    Cancel,
    Char(char),
}

/// One candidate that survived scoring, paired with its match quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub text: String,
    pub score: f64,
}

/// Immutable search state: the fixed candidate set, the query being
/// typed, the ranked matches for that query, and the cursor into them.
///
/// Invariant: `selected` always indexes a visible match — it is bounded
/// by `min(matches.len(), visible_rows) - 1`, and pinned to 0 when the
/// match list is empty. `done` is terminal; no transition applies after
/// it is set.
#[derive(Debug, Clone)]
pub struct Search {
    candidates: Arc<[String]>,
    pub query: String,
    pub matches: Vec<Match>,
    pub selected: usize,
    pub done: bool,
    visible_rows: usize,
}

impl Search {
    pub fn new(candidates: Vec<String>, initial_query: String, visible_rows: usize) -> Self {
        let candidates: Arc<[String]> = candidates.into();
        let matches = rank(&candidates, &initial_query);
        Search {
            candidates,
            query: initial_query,
            matches,
            selected: 0,
            done: false,
            visible_rows,
        }
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// The candidate the cursor is on, if the match list is non-empty.
    pub fn selection(&self) -> Option<&str> {
        self.matches.get(self.selected).map(|m| m.text.as_str())
    }

    /// Dispatch a keystroke. Terminal states and unhandled keys return
    /// the state unchanged.
    pub fn update(&self, key: &Key) -> Search {
        if self.done {
            return self.clone();
        }
        match key {
            Key::Down => self.down(),
            Key::Up => self.up(),
            Key::Char(c) => self.append(*c),
            Key::Backspace => self.backspace(),
            Key::DeleteWord => self.delete_word(),
            Key::Confirm => self.confirm(),
            Key::Cancel => self.clone(),
        }
    }

    pub fn down(&self) -> Search {
        self.next_state(self.query.clone(), self.selected + 1)
    }

    pub fn up(&self) -> Search {
        self.next_state(self.query.clone(), self.selected.saturating_sub(1))
    }

    /// New query character: re-rank and re-anchor the selection at the top.
    pub fn append(&self, c: char) -> Search {
        let mut query = self.query.clone();
        query.push(c);
        self.next_state(query, 0)
    }

    pub fn backspace(&self) -> Search {
        let mut query = self.query.clone();
        query.pop();
        self.next_state(query, 0)
    }

    /// Strip the trailing word and the spaces after it.
    ///
    /// Unlike `append` and `backspace` this keeps the selection index
    /// where it was (clamped to the recomputed match list).
    pub fn delete_word(&self) -> Search {
        self.next_state(strip_word(&self.query), self.selected)
    }

    pub fn confirm(&self) -> Search {
        Search {
            done: true,
            ..self.clone()
        }
    }

    fn next_state(&self, query: String, selected: usize) -> Search {
        let matches = rank(&self.candidates, &query);
        let selected = selected.min(last_selectable(matches.len(), self.visible_rows));
        Search {
            candidates: self.candidates.clone(),
            query,
            matches,
            selected,
            done: self.done,
            visible_rows: self.visible_rows,
        }
    }
}

/// Highest index the selection may occupy: the last match above the fold.
fn last_selectable(match_count: usize, visible_rows: usize) -> usize {
    match_count.min(visible_rows).saturating_sub(1)
}

/// Score every candidate, drop the non-matches, sort best first.
///
/// The sort is stable and compares score alone, so candidates with equal
/// scores keep their original input order.
fn rank(candidates: &[String], query: &str) -> Vec<Match> {
    let mut matches: Vec<Match> = candidates
        .iter()
        .map(|c| Match {
            text: c.clone(),
            score: score(c, query),
        })
        .filter(|m| m.score > 0.0)
        .collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Remove the trailing run of non-space characters plus any spaces that
/// follow it (the `[^ ]*\s*$` edit).
fn strip_word(query: &str) -> String {
    query
        .trim_end_matches(' ')
        .trim_end_matches(|c: char| c != ' ')
        .to_string()
}
