use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 4: Scratchcards",
    parsed = Scratchcards,
    part_one = Day04,
    part_two = Day04,
    answer_one = "32001",
    answer_two = "5037841"
)]
impl super::AdventOfCode2023<4> {}

#[derive(thiserror::Error, Debug)]
enum ScratchcardError {
    #[error("expected \"Card <id>: <winning numbers> | <numbers you have>\", found {0:?}")]
    InvalidCard(String),

    #[error("card numbers must be below 128, found {0}")]
    NumberOutOfRange(u8),

    #[error("total overflowed")]
    Overflow,
}

/*
Input is a pile of scratchcards, one per line. Each card has a list of winning numbers and, after a
`|`, the numbers you have. Only the count of your numbers that are winning numbers matters.
*/

/// A set of card numbers as bits, for numbers below 128.
fn number_set(numbers: &str) -> DynamicResult<u128> {
    numbers.split_whitespace().try_fold(0, |set, number| {
        let number: u8 = parse_with_context(number)?;
        if number >= 128 {
            return Err(ScratchcardError::NumberOutOfRange(number).into());
        }
        Ok(set | (1 << number))
    })
}

/// The count of matching numbers on each card, in card order.
struct Scratchcards(Vec<usize>);

impl ParseData for Scratchcards {
    fn parse(input: &str) -> DynamicResult<Self> {
        let matches = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let invalid = || ScratchcardError::InvalidCard(line.to_owned());
            let (_, numbers) = line.split_once(':').ok_or_else(invalid)?;
            let (winning, have) = numbers.split_once('|').ok_or_else(invalid)?;
            let common = number_set(winning)? & number_set(have)?;
            Ok(common.count_ones() as usize)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(matches))
    }
}

/*
For part 1, a card is worth one point for its first match, then doubles for each match after that.
Sum the points of all cards.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = Scratchcards;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let points: Vec<u32> = input
            .0
            .iter()
            .map(|&matches| match matches {
                0 => Ok(0),
                n => 1u32.checked_shl(n as u32 - 1).ok_or(ScratchcardError::Overflow),
            })
            .collect::<Result<_, _>>()?;
        Ok(points
            .into_iter()
            .checked_sum()
            .ok_or(ScratchcardError::Overflow)?)
    }
}

/*
For part 2, a card with `n` matches wins one copy of each of the next `n` cards. Copies win cards too.
Cards never win copies past the end of the table. Count all the original and copied cards.
*/

impl Solution<PartTwo> for Day04 {
    type Input = Scratchcards;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut copies = vec![1u64; input.0.len()];
        for (index, &matches) in input.0.iter().enumerate() {
            let won = copies[index];
            let last = (index + matches).min(copies.len() - 1);
            for count in &mut copies[index + 1..=last] {
                *count = count.checked_add(won).ok_or(ScratchcardError::Overflow)?;
            }
        }
        Ok(copies
            .into_iter()
            .checked_sum()
            .ok_or(ScratchcardError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day04 as Solution<PartOne>>::solve(&parsed)?, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day04 as Solution<PartTwo>>::solve(&parsed)?, 30);
        Ok(())
    }

    #[test]
    fn matches_are_counted_per_card() -> DynamicResult<()> {
        let parsed = Scratchcards::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0, vec![4, 2, 2, 1, 0, 0]);
        Ok(())
    }
}
