//! # TUI Adapter
//!
//! The crossterm-specific layer. Owns the terminal for the session,
//! renders search states, and translates keyboard events into core
//! keystrokes.
//!
//! This is the only module tree that knows about crossterm. The session
//! loop itself is generic over the [`terminal::Terminal`] trait, so the
//! whole interactive flow runs unchanged against the scripted terminal
//! in tests.
//!
//! ## Session shape
//!
//! ```text
//! reserve rows
//! loop {
//!     paint(render(search))
//!     key = read_key()        // blocks
//!     search = search.update(key)
//! } until done or cancelled
//! ```
//!
//! One logical thread; the only suspension point is the keypress read,
//! so every frame reflects exactly the transition before it. Terminal
//! restoration lives in the crossterm terminal's `Drop`, which makes it
//! scope-guaranteed on success, cancel, and error paths alike.

pub mod event;
pub mod render;
pub mod screen;
pub mod terminal;

use std::fmt;
use std::io;

use log::{debug, info};

use crate::core::config::ResolvedConfig;
use crate::core::state::{Key, Search};
use crate::tui::render::render;
use crate::tui::screen::Screen;
use crate::tui::terminal::Terminal;

/// How a session can fail.
#[derive(Debug)]
pub enum SiftError {
    Io(io::Error),
    /// Confirmed with nothing matching the query.
    NoMatch,
    /// Deliberate abort (Ctrl-C / Esc).
    Cancelled,
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftError::Io(e) => write!(f, "terminal I/O error: {e}"),
            SiftError::NoMatch => write!(f, "no match"),
            SiftError::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::error::Error for SiftError {}

impl From<io::Error> for SiftError {
    fn from(e: io::Error) -> Self {
        SiftError::Io(e)
    }
}

/// Run one interactive selection session to completion.
///
/// Returns the confirmed candidate's text, `Cancelled` on a deliberate
/// abort, or `NoMatch` when the user confirmed an empty match list.
pub fn run<T: Terminal>(
    terminal: T,
    candidates: Vec<String>,
    config: &ResolvedConfig,
) -> Result<String, SiftError> {
    info!(
        "Session starting: {} candidates, {} visible rows",
        candidates.len(),
        config.visible_rows
    );

    let mut search = Search::new(candidates, config.initial_query.clone(), config.visible_rows);
    let mut screen = Screen::new(terminal, config.visible_rows);
    screen.reserve()?;

    loop {
        screen.paint(&render(&search))?;

        let key = screen.read_key()?;
        debug!("Applying key: {:?}", key);

        if key == Key::Cancel {
            info!("Session cancelled");
            return Err(SiftError::Cancelled);
        }

        search = search.update(&key);
        if search.done {
            let selection = search.selection().map(str::to_string);
            info!("Session done, selection: {:?}", selection);
            return selection.ok_or(SiftError::NoMatch);
        }
    }
}
