//! Puzzles of the 2022 edition.

use puzzle_kit::runner::PuzzleRunner;

use super::PuzzleFn;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;

/// Marker type for each day of the edition, implemented as a [`PuzzleRunner`] by each day's module.
struct AdventOfCode2022<const DAY: u8>;

/// Find the runner for a day, if the day has a puzzle.
pub(super) fn find_day(day: u8) -> Option<PuzzleFn> {
    let runner: PuzzleFn = match day {
        1 => AdventOfCode2022::<1>::run,
        2 => AdventOfCode2022::<2>::run,
        3 => AdventOfCode2022::<3>::run,
        4 => AdventOfCode2022::<4>::run,
        5 => AdventOfCode2022::<5>::run,
        6 => AdventOfCode2022::<6>::run,
        7 => AdventOfCode2022::<7>::run,
        8 => AdventOfCode2022::<8>::run,
        9 => AdventOfCode2022::<9>::run,
        10 => AdventOfCode2022::<10>::run,
        11 => AdventOfCode2022::<11>::run,
        12 => AdventOfCode2022::<12>::run,
        _ => return None,
    };
    Some(runner)
}
