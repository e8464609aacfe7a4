//! # Renderer
//!
//! Pure view of a [`Search`]: one query line followed by exactly
//! `visible_rows` result lines, short lists padded with blanks so the
//! drawn region never changes shape between frames.
//!
//! Styling is structural here — [`Fragment`] tags, not escape bytes.
//! Turning tags into terminal attributes is the display layer's job.

use unicode_width::UnicodeWidthStr;

use crate::core::state::Search;

pub const PROMPT: &str = "> ";

/// The fixed style vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Inverse,
}

/// A piece of a rendered line: literal text or a style marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Set(Style),
    Reset,
}

/// One frame of output: `visible_rows + 1` styled lines plus the column
/// the cursor should rest on (the end of the query text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Vec<Fragment>>,
    pub cursor_col: usize,
}

pub fn render(search: &Search) -> Frame {
    let mut lines = Vec::with_capacity(search.visible_rows() + 1);

    let query_line = format!("{PROMPT}{}", search.query);
    let cursor_col = query_line.width();
    lines.push(vec![Fragment::Text(query_line)]);

    for row in 0..search.visible_rows() {
        let line = match search.matches.get(row) {
            Some(m) if row == search.selected => vec![
                Fragment::Set(Style::Inverse),
                Fragment::Text(m.text.clone()),
                Fragment::Reset,
            ],
            Some(m) => vec![Fragment::Text(m.text.clone())],
            None => vec![Fragment::Text(String::new())],
        };
        lines.push(line);
    }

    Frame { lines, cursor_col }
}
