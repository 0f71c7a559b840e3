use std::ops::RangeInclusive;

use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[puzzle_runner(
    title = "Day 4: Camp Cleanup",
    parsed = AssignmentPairs,
    part_one = Day04,
    part_two = Day04,
    answer_one = "509",
    answer_two = "870"
)]
impl super::AdventOfCode2022<4> {}

#[derive(thiserror::Error, Debug)]
enum AssignmentError {
    #[error("expected a pair of section ranges like \"2-4,6-8\", found {0:?}")]
    InvalidPair(String),

    #[error("section range starts after it ends: {start}-{end}")]
    ReversedRange { start: Section, end: Section },
}

/*
Input is a list of section assignment pairs, one pair of elves per line. Each elf has an inclusive
range of section IDs, written as `start-end`, and the two ranges are separated by a comma.
*/

type Section = u32;

struct AssignmentPair(RangeInclusive<Section>, RangeInclusive<Section>);

struct AssignmentPairs(Vec<AssignmentPair>);

impl ParseData for AssignmentPairs {
    fn parse(input: &str) -> DynamicResult<Self> {
        let pair_re =
            Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$").expect("pattern should be valid");

        let pairs = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let captures = pair_re
                .captures(line.trim())
                .ok_or_else(|| AssignmentError::InvalidPair(line.to_owned()))?;
            let [a_start, a_end, b_start, b_end] = captures.extract().1;

            let make_range = |start: &str, end: &str| -> DynamicResult<_> {
                let start: Section = parse_with_context(start)?;
                let end: Section = parse_with_context(end)?;
                if start > end {
                    return Err(AssignmentError::ReversedRange { start, end }.into());
                }
                Ok(start..=end)
            };
            Ok(AssignmentPair(
                make_range(a_start, a_end)?,
                make_range(b_start, b_end)?,
            ))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(pairs))
    }
}

/*
For part 1, count the pairs where one range fully contains the other.
*/

fn contains(outer: &RangeInclusive<Section>, inner: &RangeInclusive<Section>) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = AssignmentPairs;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|AssignmentPair(a, b)| contains(a, b) || contains(b, a))
            .count())
    }
}

/*
For part 2, count the pairs whose ranges overlap at all.
*/

impl Solution<PartTwo> for Day04 {
    type Input = AssignmentPairs;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|AssignmentPair(a, b)| a.start() <= b.end() && b.start() <= a.end())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AssignmentPairs::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day04 as Solution<PartOne>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AssignmentPairs::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day04 as Solution<PartTwo>>::solve(&parsed)?, 4);
        Ok(())
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        assert!(AssignmentPairs::parse("5-2,1-1").is_err());
    }
}
