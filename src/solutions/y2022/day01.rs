use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_lines_with_offset, parse_with_context, split_blocks};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 1: Calorie Counting",
    parsed = ElfPacks,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2022<1> {}

#[derive(thiserror::Error, Debug)]
enum CalorieError {
    #[error("calorie total overflowed for elf {0}")]
    TotalOverflow(usize),

    #[error("expected at least {0} elves")]
    NotEnoughElves(usize),
}

/*
Input lists the calories of food items carried by each elf. Each item is on its own line, and elves
are separated by a blank line.
*/

type Calories = u32;

/// The total calories carried by each elf, in input order.
struct ElfPacks(Vec<Calories>);

impl ParseData for ElfPacks {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut totals = Vec::new();
        for (elf_index, block) in split_blocks(input).enumerate() {
            let items: Vec<Calories> =
                parse_lines_with_offset(block.text, block.line_offset, |_, line| {
                    parse_with_context(line.trim())
                })
                .collect::<Result<_, _>>()?;
            let total = items
                .into_iter()
                .checked_sum()
                .ok_or(CalorieError::TotalOverflow(elf_index + 1))?;
            totals.push(total);
        }
        Ok(Self(totals))
    }
}

impl ElfPacks {
    /// Sum the calories of the elves carrying the most.
    fn top_total(&self, elves: usize) -> DynamicResult<Calories> {
        if self.0.len() < elves {
            return Err(CalorieError::NotEnoughElves(elves).into());
        }
        let mut totals = self.0.clone();
        totals.sort_unstable_by(|a, b| b.cmp(a));
        let sum = totals[..elves]
            .iter()
            .copied()
            .checked_sum()
            .ok_or(CalorieError::TotalOverflow(elves))?;
        Ok(sum)
    }
}

/*
For part 1, find the most calories carried by a single elf.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = ElfPacks;
    type Output = Calories;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.top_total(1)
    }
}

/*
For part 2, sum the calories carried by the top three elves.
*/

impl Solution<PartTwo> for Day01 {
    type Input = ElfPacks;
    type Output = Calories;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.top_total(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = ElfPacks::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day01 as Solution<PartOne>>::solve(&parsed)?, 24000);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = ElfPacks::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(&parsed)?, 45000);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_answer() -> DynamicResult<()> {
        let parsed = ElfPacks::parse("")?;
        assert!(<Day01 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}
