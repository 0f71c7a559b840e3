use puzzle_kit::parsing::parse_with_context;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::checked_product::CheckedProduct;

#[puzzle_runner(
    title = "Day 6: Wait For It",
    parsed = RaceSheet,
    part_one = Day06,
    part_two = Day06,
    answer_one = "2269432"
)]
impl super::AdventOfCode2023<6> {}

#[derive(thiserror::Error, Debug)]
enum RaceError {
    #[error("expected a line starting with {0:?}")]
    MissingLine(&'static str),

    #[error("found {times} race times but {distances} record distances")]
    Mismatched { times: usize, distances: usize },

    #[error("product overflowed")]
    Overflow,
}

/*
Input is a sheet of boat races: a line of race times and a line of the record distance for each
race.

```text
Time:      7  15   30
Distance:  9  40  200
```

Holding the boat's button for `h` milliseconds of a race lasting `t` makes it travel `h * (t - h)`.
A way to win is a hold time that beats the record distance.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn distance(self, hold: u64) -> u64 {
        hold.saturating_mul(self.time - hold)
    }

    /// Count the hold times that beat the record.
    ///
    /// Distance is symmetric around half the race time and rises toward it, so the winning holds
    /// are one run around the middle. Binary search finds the shortest winning hold.
    fn ways_to_win(self) -> u64 {
        let middle = self.time / 2;
        if self.distance(middle) <= self.record {
            return 0;
        }
        let (mut low, mut high) = (0, middle);
        while low < high {
            let hold = low + (high - low) / 2;
            if self.distance(hold) > self.record {
                high = hold;
            } else {
                low = hold + 1;
            }
        }
        self.time - 2 * low + 1
    }
}

struct RaceSheet {
    races: Vec<Race>,
    /// The single race read by ignoring the spaces between numbers.
    joined: Race,
}

fn parse_row<'a>(input: &'a str, label: &'static str) -> Result<&'a str, RaceError> {
    input
        .lines()
        .find_map(|line| line.trim().strip_prefix(label))
        .ok_or(RaceError::MissingLine(label))
}

impl ParseData for RaceSheet {
    fn parse(input: &str) -> DynamicResult<Self> {
        let times = parse_row(input, "Time:")?;
        let distances = parse_row(input, "Distance:")?;

        let numbers = |row: &str| -> DynamicResult<Vec<u64>> {
            Ok(row
                .split_whitespace()
                .map(parse_with_context)
                .collect::<Result<_, _>>()?)
        };
        let joined = |row: &str| -> DynamicResult<u64> {
            let digits: String = row.split_whitespace().collect();
            Ok(parse_with_context(&digits)?)
        };

        let (times_list, distances_list) = (numbers(times)?, numbers(distances)?);
        if times_list.len() != distances_list.len() {
            return Err(RaceError::Mismatched {
                times: times_list.len(),
                distances: distances_list.len(),
            }
            .into());
        }

        Ok(Self {
            races: times_list
                .into_iter()
                .zip(distances_list)
                .map(|(time, record)| Race { time, record })
                .collect(),
            joined: Race {
                time: joined(times)?,
                record: joined(distances)?,
            },
        })
    }
}

/*
For part 1, multiply together the number of ways to win each race.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = RaceSheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .races
            .iter()
            .map(|race| race.ways_to_win())
            .checked_product()
            .ok_or(RaceError::Overflow)?)
    }
}

/*
For part 2, the spaces on the sheet are bad kerning: there is only one race, with the digits of each
line run together. Count the ways to win it.
*/

impl Solution<PartTwo> for Day06 {
    type Input = RaceSheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.joined.ways_to_win())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RaceSheet::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day06 as Solution<PartOne>>::solve(&parsed)?, 288);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RaceSheet::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(&parsed)?, 71503);
        Ok(())
    }

    #[test]
    fn ways_to_win_each_example_race() {
        let ways: Vec<u64> = [(7, 9), (15, 40), (30, 200)]
            .into_iter()
            .map(|(time, record)| Race { time, record }.ways_to_win())
            .collect();
        assert_eq!(ways, vec![4, 8, 9]);
        assert_eq!(Race { time: 4, record: 4 }.ways_to_win(), 0);
    }
}
