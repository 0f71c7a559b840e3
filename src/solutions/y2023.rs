//! Puzzles of the 2023 edition.

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
mod day13;
mod day14;
mod day15;
mod day16;

/// Marker type for each day of the edition, implemented as a [`PuzzleRunner`] by each day's module.
struct AdventOfCode2023<const DAY: u8>;

/// Find the runner for a day, if the day has a puzzle.
pub(super) fn find_day(day: u8) -> Option<PuzzleFn> {
    let runner: PuzzleFn = match day {
        1 => AdventOfCode2023::<1>::run,
        2 => AdventOfCode2023::<2>::run,
        3 => AdventOfCode2023::<3>::run,
        4 => AdventOfCode2023::<4>::run,
        5 => AdventOfCode2023::<5>::run,
        6 => AdventOfCode2023::<6>::run,
        7 => AdventOfCode2023::<7>::run,
        8 => AdventOfCode2023::<8>::run,
        9 => AdventOfCode2023::<9>::run,
        10 => AdventOfCode2023::<10>::run,
        11 => AdventOfCode2023::<11>::run,
        12 => AdventOfCode2023::<12>::run,
        13 => AdventOfCode2023::<13>::run,
        14 => AdventOfCode2023::<14>::run,
        15 => AdventOfCode2023::<15>::run,
        16 => AdventOfCode2023::<16>::run,
        _ => return None,
    };
    Some(runner)
}
