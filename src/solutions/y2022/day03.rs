use checked_sum::CheckedSum;
use itertools::Itertools;
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 3: Rucksack Reorganization",
    parsed = Rucksacks,
    part_one = Day03,
    part_two = Day03,
    answer_one = "7878",
    answer_two = "2760"
)]
impl super::AdventOfCode2022<3> {}

#[derive(thiserror::Error, Debug)]
enum RucksackError {
    #[error("items must be ASCII letters, found {0:?}")]
    InvalidItem(char),

    #[error("rucksack has an odd number of items: {0}")]
    UnevenCompartments(usize),

    #[error("expected exactly one shared item, found {0}")]
    SharedItemCount(u32),

    #[error("rucksacks can't be grouped by three, {0} left over")]
    IncompleteGroup(usize),

    #[error("priority sum overflowed")]
    Overflow,
}

/*
Input lists the items in each rucksack, one rucksack per line. Items are letters, and each has a
priority: `a` to `z` are 1 to 26, `A` to `Z` are 27 to 52.

Since there are 52 priorities, a set of items fits in the bits of a `u64`, indexed by priority.
*/

/// A set of item priorities as bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSet(u64);

impl ItemSet {
    fn from_items(items: &str) -> Result<Self, RucksackError> {
        items.chars().try_fold(Self(0), |set, item| {
            let priority = match item {
                'a'..='z' => item as u32 - 'a' as u32 + 1,
                'A'..='Z' => item as u32 - 'A' as u32 + 27,
                _ => return Err(RucksackError::InvalidItem(item)),
            };
            Ok(Self(set.0 | (1 << priority)))
        })
    }

    fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// The priority of the only item in the set.
    fn single_priority(self) -> Result<u32, RucksackError> {
        match self.0.count_ones() {
            1 => Ok(self.0.trailing_zeros()),
            count => Err(RucksackError::SharedItemCount(count)),
        }
    }
}

struct Rucksack {
    first_compartment: ItemSet,
    second_compartment: ItemSet,
}

impl Rucksack {
    fn all_items(&self) -> ItemSet {
        ItemSet(self.first_compartment.0 | self.second_compartment.0)
    }
}

struct Rucksacks(Vec<Rucksack>);

impl ParseData for Rucksacks {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rucksacks = parse_input_lines(input, |_, line| {
            let line = line.trim();
            if line.len() % 2 != 0 {
                return Err(RucksackError::UnevenCompartments(line.len()));
            }
            let (first, second) = line.split_at(line.len() / 2);
            Ok(Rucksack {
                first_compartment: ItemSet::from_items(first)?,
                second_compartment: ItemSet::from_items(second)?,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rucksacks))
    }
}

/*
For part 1, each rucksack has one item type in both of its compartments (halves). Sum the
priorities of those items.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Rucksacks;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let priorities: Vec<u32> = input
            .0
            .iter()
            .map(|rucksack| {
                rucksack
                    .first_compartment
                    .intersection(rucksack.second_compartment)
                    .single_priority()
            })
            .collect::<Result<_, _>>()?;
        Ok(priorities
            .into_iter()
            .checked_sum()
            .ok_or(RucksackError::Overflow)?)
    }
}

/*
For part 2, elves are in groups of three consecutive lines. The badge is the only item type carried
by all three. Sum the priorities of the badges.
*/

impl Solution<PartTwo> for Day03 {
    type Input = Rucksacks;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let left_over = input.0.len() % 3;
        if left_over != 0 {
            return Err(RucksackError::IncompleteGroup(left_over).into());
        }

        let badges: Vec<u32> = input
            .0
            .iter()
            .map(Rucksack::all_items)
            .tuples()
            .map(|(a, b, c)| a.intersection(b).intersection(c).single_priority())
            .collect::<Result<_, _>>()?;
        Ok(badges
            .into_iter()
            .checked_sum()
            .ok_or(RucksackError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rucksacks::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 157);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Rucksacks::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&parsed)?, 70);
        Ok(())
    }

    #[test]
    fn priorities_follow_letter_order() -> DynamicResult<()> {
        assert_eq!(ItemSet::from_items("p")?.single_priority()?, 16);
        assert_eq!(ItemSet::from_items("L")?.single_priority()?, 38);
        Ok(())
    }
}
