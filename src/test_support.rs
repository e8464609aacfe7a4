//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::core::state::Key;
use crate::tui::terminal::Terminal;

/// One recorded terminal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    MoveTo(u16, u16),
    Write(String),
    Inverse(bool),
    HideCursor,
    ShowCursor,
    Flush,
}

/// A terminal double: reports a fixed size, replays a scripted key
/// sequence, and records every operation for assertions.
///
/// Reading past the end of the script fails with `UnexpectedEof`, so a
/// test whose key script doesn't terminate the session fails loudly
/// instead of hanging.
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    height: u16,
    width: u16,
    pub ops: Vec<Op>,
}

impl ScriptedTerminal {
    pub fn new(height: u16, width: u16, keys: Vec<Key>) -> Self {
        Self {
            keys: keys.into(),
            height,
            width,
            ops: Vec::new(),
        }
    }

    /// Replay the recorded writes into a character grid, for asserting
    /// what the screen would show. One cell per char; fine for the ASCII
    /// content the tests paint.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.height as usize, self.width as usize);
        let mut row = 0usize;
        let mut col = 0usize;
        for op in &self.ops {
            match op {
                Op::MoveTo(r, c) => {
                    row = *r as usize;
                    col = *c as usize;
                }
                Op::Write(text) if text == "\r\n" => {
                    row = (row + 1).min(self.height as usize);
                    col = 0;
                }
                Op::Write(text) => {
                    for ch in text.chars() {
                        grid.put(row, col, ch);
                        col += 1;
                    }
                }
                _ => {}
            }
        }
        grid
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.height, self.width))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.ops.push(Op::MoveTo(row, col));
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(Op::Write(text.to_string()));
        Ok(())
    }

    fn set_inverse(&mut self, on: bool) -> io::Result<()> {
        self.ops.push(Op::Inverse(on));
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.ops.push(Op::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.ops.push(Op::ShowCursor);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}

/// A height × width character matrix rebuilt from recorded writes.
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
        }
    }

    fn put(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cells_row) = self.cells.get_mut(row)
            && let Some(cell) = cells_row.get_mut(col)
        {
            *cell = ch;
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }
}

/// Keystrokes for typing `text` one character at a time.
pub fn keys_for(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}
