//! Puzzles of the 2021 edition.

use puzzle_kit::runner::PuzzleRunner;

use super::PuzzleFn;

mod day01;
mod day02;
mod day03;

/// Marker type for each day of the edition, implemented as a [`PuzzleRunner`] by each day's module.
struct AdventOfCode2021<const DAY: u8>;

/// Find the runner for a day, if the day has a puzzle.
pub(super) fn find_day(day: u8) -> Option<PuzzleFn> {
    let runner: PuzzleFn = match day {
        1 => AdventOfCode2021::<1>::run,
        2 => AdventOfCode2021::<2>::run,
        3 => AdventOfCode2021::<3>::run,
        _ => return None,
    };
    Some(runner)
}
