//! # Screen
//!
//! Turns a rendered [`Frame`] into exact terminal writes without
//! disturbing the surrounding scrollback. The frame block is anchored to
//! the bottom of the screen; every repaint rewrites the same rows in
//! place, truncating to the terminal width and padding with spaces so a
//! previous longer line never bleeds through.
//!
//! The cursor is hidden for the duration of the multi-line write and
//! re-shown parked at the end of the query line, which keeps it from
//! visibly jumping across rows mid-frame.

use std::io;

use unicode_width::UnicodeWidthChar;

use crate::core::state::Key;
use crate::tui::render::{Fragment, Frame, Style};
use crate::tui::terminal::Terminal;

pub struct Screen<T: Terminal> {
    terminal: T,
    visible_rows: usize,
}

impl<T: Terminal> Screen<T> {
    pub fn new(terminal: T, visible_rows: usize) -> Self {
        Self {
            terminal,
            visible_rows,
        }
    }

    /// Scroll the frame block's worth of blank lines into view before the
    /// first paint, so in-place redraws never overwrite content that was
    /// on screen when the session started.
    pub fn reserve(&mut self) -> io::Result<()> {
        for _ in 0..self.visible_rows {
            self.terminal.write("\r\n")?;
        }
        self.terminal.flush()
    }

    pub fn read_key(&mut self) -> io::Result<Key> {
        self.terminal.read_key()
    }

    pub fn paint(&mut self, frame: &Frame) -> io::Result<()> {
        let (height, width) = self.terminal.size()?;
        let start = height.saturating_sub(self.visible_rows as u16 + 1);

        self.terminal.hide_cursor()?;
        for (i, line) in frame.lines.iter().enumerate() {
            let row = start as usize + i;
            // rows past the bottom of a shrunken terminal are dropped
            if row >= height as usize {
                continue;
            }
            self.paint_line(row as u16, line, width as usize)?;
        }

        let cursor_col = frame.cursor_col.min(width.saturating_sub(1) as usize);
        self.terminal.move_to(start, cursor_col as u16)?;
        self.terminal.show_cursor()?;
        self.terminal.flush()
    }

    fn paint_line(&mut self, row: u16, line: &[Fragment], width: usize) -> io::Result<()> {
        self.terminal.move_to(row, 0)?;
        let mut remaining = width;
        for fragment in line {
            match fragment {
                Fragment::Set(Style::Inverse) => self.terminal.set_inverse(true)?,
                Fragment::Reset => self.terminal.set_inverse(false)?,
                Fragment::Text(text) => {
                    let (clipped, used) = clip_to_width(text, remaining);
                    self.terminal.write(clipped)?;
                    remaining -= used;
                }
            }
        }
        // erase whatever a previous, longer line left behind
        if remaining > 0 {
            self.terminal.write(&" ".repeat(remaining))?;
        }
        Ok(())
    }
}

/// Longest prefix of `text` fitting in `max` display columns, with the
/// number of columns it occupies.
fn clip_to_width(text: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max {
            return (&text[..i], used);
        }
        used += ch_width;
    }
    (text, used)
}
