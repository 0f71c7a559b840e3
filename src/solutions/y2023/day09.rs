use checked_sum::CheckedSum;
use itertools::Itertools;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 9: Mirage Maintenance",
    parsed = Report,
    part_one = Day09,
    part_two = Day09,
    answer_one = "2098530125"
)]
impl super::AdventOfCode2023<9> {}

#[derive(thiserror::Error, Debug)]
enum ReportError {
    #[error("a history needs at least one value")]
    EmptyHistory,

    #[error("extrapolated value overflowed")]
    Overflow,
}

/*
Input is an oasis report. Each line is the history of one value, as numbers separated by spaces.

A history is extrapolated by taking the differences between its neighboring values, then the
differences of those, until every difference is zero. The zero row extends by another zero, and
each row above extends by the value that keeps its differences consistent.
*/

type Value = i64;

struct Report(Vec<Vec<Value>>);

impl ParseData for Report {
    fn parse(input: &str) -> DynamicResult<Self> {
        let histories = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let history = line
                .split_whitespace()
                .map(parse_with_context::<Value>)
                .collect::<Result<Vec<_>, _>>()?;
            if history.is_empty() {
                return Err(ReportError::EmptyHistory.into());
            }
            Ok(history)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(histories))
    }
}

/// Extrapolate a history one step past each end, returning the `(previous, next)` values.
fn extrapolate(history: &[Value]) -> Result<(Value, Value), ReportError> {
    let (Some(&first), Some(&last)) = (history.first(), history.last()) else {
        return Err(ReportError::EmptyHistory);
    };
    if history.iter().all(|&value| value == 0) {
        return Ok((0, 0));
    }
    let differences = history
        .iter()
        .tuple_windows()
        .map(|(a, b)| b.checked_sub(*a))
        .collect::<Option<Vec<_>>>()
        .ok_or(ReportError::Overflow)?;
    if differences.is_empty() {
        // a single nonzero value extends as a constant
        return Ok((first, last));
    }

    let (previous_difference, next_difference) = extrapolate(&differences)?;
    Ok((
        first
            .checked_sub(previous_difference)
            .ok_or(ReportError::Overflow)?,
        last.checked_add(next_difference)
            .ok_or(ReportError::Overflow)?,
    ))
}

fn sum_extrapolated(
    report: &Report,
    pick: impl Fn((Value, Value)) -> Value,
) -> Result<Value, ReportError> {
    let values = report
        .0
        .iter()
        .map(|history| extrapolate(history).map(&pick))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .into_iter()
        .checked_sum()
        .ok_or(ReportError::Overflow)
}

/*
For part 1, sum the next value of each history.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Report;
    type Output = Value;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_extrapolated(input, |(_, next)| next)?)
    }
}

/*
For part 2, extrapolate backwards instead and sum the value before each history.
*/

impl Solution<PartTwo> for Day09 {
    type Input = Report;
    type Output = Value;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_extrapolated(input, |(previous, _)| previous)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Report::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day09 as Solution<PartOne>>::solve(&parsed)?, 114);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Report::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day09 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn histories_extrapolate_both_ways() -> Result<(), ReportError> {
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45])?, (5, 68));
        assert_eq!(extrapolate(&[-4, -4])?, (-4, -4));
        Ok(())
    }
}
