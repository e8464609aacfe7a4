mod core;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::config;
use crate::tui::SiftError;
use crate::tui::terminal::CrosstermTerminal;

#[derive(Parser)]
#[command(name = "sift", about = "Fuzzy-select one line from stdin")]
struct Args {
    /// Seed the query before the first render
    #[arg(short, long)]
    search: Option<String>,

    /// Number of result rows below the query line
    #[arg(long)]
    rows: Option<usize>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("sift: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.rows,
        args.search.as_deref(),
        args.log_file.as_deref(),
    );

    // File logger only: stdout carries the selection, stderr the UI
    if let Some(path) = &resolved.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }

    log::info!("Sift starting up with {} visible rows", resolved.visible_rows);

    let candidates = match read_candidates(io::stdin().lock()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("sift: {e}");
            return ExitCode::FAILURE;
        }
    };

    let terminal = match CrosstermTerminal::new() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("sift: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(terminal, candidates, &resolved) {
        Ok(selection) => {
            println!("{selection}");
            ExitCode::SUCCESS
        }
        Err(SiftError::Cancelled) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("sift: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read candidate lines from `input`: lossy UTF-8 with the invalid
/// sequences dropped, trailing whitespace stripped per line, empty lines
/// skipped. Core logic never sees malformed text.
fn read_candidates<R: Read>(mut input: R) -> io::Result<Vec<String>> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes).replace('\u{FFFD}', "");
    Ok(text
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::read_candidates;

    #[test]
    fn test_read_candidates_strips_trailing_whitespace() {
        let input = b"one  \ntwo\t\nthree\n" as &[u8];
        assert_eq!(read_candidates(input).unwrap(), ["one", "two", "three"]);
    }

    #[test]
    fn test_read_candidates_skips_empty_lines() {
        let input = b"one\n\n\ntwo\n" as &[u8];
        assert_eq!(read_candidates(input).unwrap(), ["one", "two"]);
    }

    #[test]
    fn test_read_candidates_drops_invalid_utf8() {
        let input = b"on\xffe\ntwo\n" as &[u8];
        assert_eq!(read_candidates(input).unwrap(), ["one", "two"]);
    }

    #[test]
    fn test_read_candidates_handles_missing_final_newline() {
        let input = b"one\ntwo" as &[u8];
        assert_eq!(read_candidates(input).unwrap(), ["one", "two"]);
    }
}
