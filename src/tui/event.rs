use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::core::state::Key;

/// Map a crossterm key event to a sift keystroke.
///
/// Unrecognized keys (function keys, alt chords, stray control codes)
/// map to `None` and are ignored by the session loop. Only plain
/// printable characters reach the query.
pub fn map_key(key_event: &KeyEvent) -> Option<Key> {
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(Key::Down),
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(Key::Up),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(Key::DeleteWord),
        (KeyModifiers::CONTROL, KeyCode::Char('h')) => Some(Key::Backspace),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Cancel),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Backspace) => Some(Key::Backspace),
        (_, KeyCode::Enter) => Some(Key::Confirm),
        (_, KeyCode::Esc) => Some(Key::Cancel),
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        _ => None,
    }
}
