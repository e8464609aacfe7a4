use sift::core::state::{Key, Search};

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds a search over string-literal candidates with 20 visible rows.
fn search_over(candidates: &[&str]) -> Search {
    let candidates = candidates.iter().map(|s| s.to_string()).collect();
    Search::new(candidates, String::new(), 20)
}

/// Folds a whole keystroke sequence through the state machine.
fn apply(search: Search, keys: &[Key]) -> Search {
    keys.iter().fold(search, |s, k| s.update(k))
}

fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

// ============================================================================
// Full keystroke scenarios
// ============================================================================

#[test]
fn test_typing_narrows_and_confirm_selects() {
    let mut keys = typed("scr");
    keys.push(Key::Confirm);

    let end = apply(
        search_over(&["selecta.rb", "search.rb", "score_test.rb"]),
        &keys,
    );
    assert!(end.done);
    assert_eq!(end.selection(), Some("search.rb"));
}

#[test]
fn test_arrowing_down_selects_the_second_match() {
    let mut keys = typed("scr");
    keys.extend([Key::Down, Key::Confirm]);

    let end = apply(
        search_over(&["selecta.rb", "search.rb", "score_test.rb"]),
        &keys,
    );
    assert_eq!(end.selection(), Some("selecta.rb"));
}

#[test]
fn test_overtype_backspace_recovers_the_ranking() {
    let mut keys = typed("searchx");
    keys.extend([Key::Backspace, Key::Confirm]);

    let end = apply(search_over(&["search.rb", "selecta.rb"]), &keys);
    assert_eq!(end.selection(), Some("search.rb"));
}

#[test]
fn test_delete_word_widens_back_to_everything() {
    let mut keys = typed("zzz");
    keys.extend([Key::DeleteWord, Key::Confirm]);

    let end = apply(search_over(&["alpha", "beta"]), &keys);
    assert_eq!(end.query, "");
    assert_eq!(end.selection(), Some("alpha"));
}

#[test]
fn test_confirm_on_empty_match_list_selects_nothing() {
    let mut keys = typed("zzz");
    keys.push(Key::Confirm);

    let end = apply(search_over(&["alpha", "beta"]), &keys);
    assert!(end.done);
    assert_eq!(end.selection(), None);
}

#[test]
fn test_keys_after_confirm_change_nothing() {
    let mut keys = typed("al");
    keys.push(Key::Confirm);
    keys.extend(typed("garbage"));
    keys.push(Key::Down);

    let end = apply(search_over(&["alpha", "align"]), &keys);
    assert_eq!(end.query, "al");
    assert_eq!(end.selection(), Some("alpha"));
}

// ============================================================================
// Ranking behavior across edits
// ============================================================================

#[test]
fn test_tied_scores_preserve_input_order_end_to_end() {
    let mut keys = typed("a");
    keys.push(Key::Confirm);

    let end = apply(search_over(&["b", "a1", "a2"]), &keys);
    let ranked: Vec<&str> = end.matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(ranked, ["a1", "a2"]);
}

#[test]
fn test_each_keystroke_reranks_from_scratch() {
    let candidates = ["map.rs", "main.rs", "mod.rs"];

    let after_m = apply(search_over(&candidates), &typed("m"));
    assert_eq!(after_m.matches.len(), 3);

    let after_mai = apply(after_m, &typed("ai"));
    let ranked: Vec<&str> = after_mai.matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(ranked, ["main.rs"]);
}
