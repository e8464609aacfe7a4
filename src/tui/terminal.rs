//! # Terminal Collaborator
//!
//! The one seam between sift and the terminal device. Everything the
//! display layer needs is behind the [`Terminal`] trait: raw-mode entry
//! and restoration, a blocking keypress read, the screen dimensions,
//! positioned writes, and cursor visibility. Tests drive the display with
//! a scripted implementation; production uses [`CrosstermTerminal`].
//!
//! The UI paints to **stderr** so stdout stays clean for the selected
//! line even when it is piped. crossterm reads key events from the
//! controlling tty, so candidates can stream in on stdin at the same
//! time.

use std::io::{self, Stderr, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};
use log::info;

use crate::core::state::Key;
use crate::tui::event::map_key;

/// Terminal-control operations the display layer depends on.
///
/// Rows and columns are 0-based; `size` is (height, width).
pub trait Terminal {
    fn size(&self) -> io::Result<(u16, u16)>;
    /// Block until a recognized keypress arrives.
    fn read_key(&mut self) -> io::Result<Key>;
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn set_inverse(&mut self, on: bool) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Production terminal: raw mode for the lifetime of the value.
///
/// Constructing it enters raw mode; `Drop` parks the cursor on the last
/// row, makes it visible again, and restores the previous terminal mode.
/// Holding restoration in `Drop` guarantees it runs on every exit path —
/// normal completion, cancellation, errors, and panics alike.
pub struct CrosstermTerminal {
    out: Stderr,
}

impl CrosstermTerminal {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        info!("Raw mode enabled");
        Ok(Self { out: io::stderr() })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let last_row = terminal::size().map(|(_, rows)| rows.saturating_sub(1)).unwrap_or(0);
        let _ = execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            MoveTo(0, last_row),
            Show
        );
        let _ = disable_raw_mode();
        info!("Raw mode restored");
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
                && let Some(key) = map_key(&key_event)
            {
                return Ok(key);
            }
        }
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        // crossterm's MoveTo takes (column, row)
        queue!(self.out, MoveTo(col, row))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn set_inverse(&mut self, on: bool) -> io::Result<()> {
        let attribute = if on { Attribute::Reverse } else { Attribute::NoReverse };
        queue!(self.out, SetAttribute(attribute))
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, Show)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
