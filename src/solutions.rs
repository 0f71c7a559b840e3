//! Puzzle solutions, grouped by edition.
//!
//! [`find_puzzle`] looks up a runnable puzzle by its edition and day. Each edition module holds a
//! marker type per day that implements [`PuzzleRunner`][puzzle_kit::runner::PuzzleRunner], and a
//! `find_day` function matching days to those markers.
//!
//! Steps to make a puzzle available to run:
//! 1. Make a `dayNN` submodule in the edition's module.
//! 2. Implement the edition marker for the day with
//!    [`#[puzzle_runner]`][puzzle_kit::runner::puzzle_runner].
//! 3. Add a match case to the edition's `find_day`:
//!
//! ```ignore
//! 5 => AdventOfCode2022::<5>::run,
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use std::fmt::{self, Display};
use std::str::FromStr;

use puzzle_kit::DynamicResult;
use puzzle_kit::runner::{OutputHandler, RunSettings};
use thiserror::Error;

mod y2021;
mod y2022;
mod y2023;

/// The signature of [`PuzzleRunner::run`][puzzle_kit::runner::PuzzleRunner::run], used to hand a
/// found puzzle back to the caller.
pub type PuzzleFn = fn(&str, &mut dyn OutputHandler, RunSettings) -> DynamicResult<()>;

/// A puzzle's day within an edition, written as `day-05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleDay(u8);

impl PuzzleDay {
    pub fn number(self) -> u8 {
        self.0
    }
}

impl Display for PuzzleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day-{:02}", self.0)
    }
}

/// A puzzle identifier that isn't a day number.
#[derive(Error, Debug)]
#[error("expected a puzzle like \"day-05\", \"day05\" or \"5\", found {0:?}")]
pub struct InvalidPuzzleDay(String);

impl FromStr for PuzzleDay {
    type Err = InvalidPuzzleDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("day").unwrap_or(s);
        let digits = digits.strip_prefix('-').unwrap_or(digits);

        match digits.parse::<u8>() {
            Ok(day) if digits.bytes().all(|b| b.is_ascii_digit()) && day > 0 => Ok(Self(day)),
            _ => Err(InvalidPuzzleDay(s.to_owned())),
        }
    }
}

/// No puzzle is implemented for an edition and day.
#[derive(Error, Debug)]
#[error("no puzzle available for {puzzle} of edition {edition}")]
pub struct PuzzleNotFound {
    pub edition: u16,
    pub puzzle: PuzzleDay,
}

/// Find the runner for a puzzle.
///
/// # Errors
///
/// Returns [`PuzzleNotFound`] for an unknown edition, or a day without a puzzle in the edition.
pub fn find_puzzle(edition: u16, puzzle: PuzzleDay) -> Result<PuzzleFn, PuzzleNotFound> {
    let found = match edition {
        2021 => y2021::find_day(puzzle.number()),
        2022 => y2022::find_day(puzzle.number()),
        2023 => y2023::find_day(puzzle.number()),
        _ => None,
    };
    found.ok_or(PuzzleNotFound { edition, puzzle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_day_accepts_common_forms() -> DynamicResult<()> {
        for text in ["day-05", "day05", "05", "5"] {
            let day: PuzzleDay = text.parse()?;
            assert_eq!(day.number(), 5, "parsing {text:?}");
        }
        assert_eq!("day-12".parse::<PuzzleDay>()?.to_string(), "day-12");
        Ok(())
    }

    #[test]
    fn puzzle_day_rejects_other_text() {
        for text in ["", "day-", "day-x", "week-1", "0", "day-+3", "300"] {
            assert!(text.parse::<PuzzleDay>().is_err(), "parsing {text:?}");
        }
    }

    #[test]
    fn unknown_puzzles_are_not_found() -> DynamicResult<()> {
        assert!(find_puzzle(2019, "day-01".parse()?).is_err());
        assert!(find_puzzle(2022, "day-25".parse()?).is_err());
        assert!(find_puzzle(2023, "day-16".parse()?).is_ok());
        Ok(())
    }
}
