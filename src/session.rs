#![cfg(feature = "std")]

//! Text front end that drives a [`Board`] from a line-based input stream.
//!
//! Input and output are generic so the same loop serves stdin/stdout in the
//! binary and in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, BoardStats};
use crate::common::{BoardError, GuessResult};
use crate::config::BOARD_SIZE;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SessionSummary {
    pub stats: BoardStats,
    /// `false` when the input ran out before the fleet was sunk.
    pub completed: bool,
}

/// Parse a shot written as `"row col"` or `"row,col"`, both in 0-9.
pub fn parse_shot(input: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let (row_str, col_str) = match parts.as_slice() {
        [] => return Err("Empty input".to_string()),
        [row, col] => (*row, *col),
        [_] => return Err("Need both a row and a column (e.g. 3 7)".to_string()),
        _ => return Err(format!("Expected two numbers, got {}", parts.len())),
    };
    let row = parse_axis("row", row_str)?;
    let col = parse_axis("column", col_str)?;
    Ok((row, col))
}

fn parse_axis(axis: &str, value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 0-{}", axis, value, BOARD_SIZE - 1))?;
    if n >= BOARD_SIZE {
        return Err(format!("{} {} out of bounds - must be 0-{}", axis, n, BOARD_SIZE - 1));
    }
    Ok(n)
}

/// Run the shoot-until-sunk loop against `board`, reading one shot per line.
pub fn run_session<R, W>(board: &mut Board, input: R, output: &mut W) -> anyhow::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to Battleship!")?;
    let mut lines = input.lines();
    while !board.is_complete() {
        write!(output, "{}", board)?;
        writeln!(
            output,
            "Shots fired: {}  Ships sunk: {}",
            board.shots_fired(),
            board.ships_sunk()
        )?;
        write!(output, "Enter row and column (0-{}): ", BOARD_SIZE - 1)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read shot")?,
            None => break,
        };
        let (row, col) = match parse_shot(line.trim()) {
            Ok(coord) => coord,
            Err(e) => {
                writeln!(output, "Invalid coordinates: {}. Please try again.", e)?;
                continue;
            }
        };
        match board.fire(row, col)? {
            GuessResult::Hit => writeln!(output, "You hit a ship!")?,
            GuessResult::Miss => writeln!(output, "You missed.")?,
            GuessResult::Sink(name) => writeln!(output, "You hit a ship! You sank a {}!", name)?,
        }
    }

    let completed = board.is_complete();
    if completed {
        write!(output, "{}", board)?;
        writeln!(output, "Congratulations! You've sunk all the ships!")?;
        writeln!(output, "Total shots fired: {}", board.shots_fired())?;
    } else {
        writeln!(
            output,
            "\nSession ended with {} ships still afloat.",
            board.stats().ships_remaining
        )?;
        write!(output, "{}", board.render_revealed())?;
    }
    Ok(SessionSummary {
        stats: board.stats(),
        completed,
    })
}

/// Fire at every cell in a random order until the fleet is sunk.
pub fn autoplay<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<BoardStats, BoardError> {
    let mut targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect();
    targets.shuffle(rng);
    for (row, col) in targets {
        if board.is_complete() {
            break;
        }
        board.fire(row, col)?;
    }
    Ok(board.stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_space_and_comma() {
        assert_eq!(parse_shot("3 7"), Ok((3, 7)));
        assert_eq!(parse_shot("0,9"), Ok((0, 9)));
        assert_eq!(parse_shot(" 4 ,  2 "), Ok((4, 2)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_shot("").is_err());
        assert!(parse_shot("5").is_err());
        assert!(parse_shot("1 2 3").is_err());
        assert!(parse_shot("a 2").is_err());
        assert!(parse_shot("10 2").is_err());
        assert!(parse_shot("2 -1").is_err());
    }
}
