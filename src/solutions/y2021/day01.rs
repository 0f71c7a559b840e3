use itertools::Itertools;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(title = "Day 1: Sonar Sweep", parsed = Depths, part_one = Day01, part_two = Day01)]
impl super::AdventOfCode2021<1> {}

/*
Input is a sonar sweep report, one depth measurement per line.
*/

type Depth = u32;

struct Depths(Vec<Depth>);

impl ParseData for Depths {
    fn parse(input: &str) -> DynamicResult<Self> {
        let depths = parse_input_lines(input, |_, line| parse_with_context(line.trim()))
            .collect::<Result<_, _>>()?;
        Ok(Self(depths))
    }
}

/// Count how many values are larger than the value before them.
fn count_increases(values: impl Iterator<Item = Depth>) -> usize {
    values
        .tuple_windows()
        .filter(|(previous, next)| next > previous)
        .count()
}

/*
For part 1, count the measurements that increase from the previous measurement.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Depths;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_increases(input.0.iter().copied()))
    }
}

/*
For part 2, compare sums of a three-measurement sliding window instead. Windows that run past the
end of the report are not counted.
*/

impl Solution<PartTwo> for Day01 {
    type Input = Depths;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let window_sums = input.0.windows(3).map(|window| window.iter().sum());
        Ok(count_increases(window_sums))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
199
200
208
210
200
207
240
269
260
263
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Depths::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day01 as Solution<PartOne>>::solve(&parsed)?, 7);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Depths::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(&parsed)?, 5);
        Ok(())
    }
}
