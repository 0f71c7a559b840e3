use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::checked_product::CheckedProduct;

#[puzzle_runner(
    title = "Day 2: Cube Conundrum",
    parsed = GameRecord,
    part_one = Day02,
    part_two = Day02,
    answer_one = "2156",
    answer_two = "66909"
)]
impl super::AdventOfCode2023<2> {}

#[derive(thiserror::Error, Debug)]
enum GameError {
    #[error("expected a line like \"Game 1: 3 blue, 4 red\", found {0:?}")]
    InvalidGame(String),

    #[error("expected a count and color like \"3 blue\", found {0:?}")]
    InvalidCubes(String),

    #[error("unknown cube color {0:?}")]
    UnknownColor(String),

    #[error("sum overflowed")]
    Overflow,
}

/*
Input records games played with a bag of red, green and blue cubes. Each line is a game with an ID
and the handfuls of cubes revealed, separated by semicolons. A handful lists counts of colors,
separated by commas.

```text
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
```
*/

type CubeCount = u32;

/// Counts of cubes by color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CubeSet {
    red: CubeCount,
    green: CubeCount,
    blue: CubeCount,
}

impl CubeSet {
    fn parse_handful(handful: &str) -> DynamicResult<Self> {
        let mut set = Self::default();
        for cubes in handful.split(',').map(str::trim) {
            let (count, color) = cubes
                .split_once(' ')
                .ok_or_else(|| GameError::InvalidCubes(cubes.to_owned()))?;
            let count: CubeCount = parse_with_context(count)?;
            let slot = match color {
                "red" => &mut set.red,
                "green" => &mut set.green,
                "blue" => &mut set.blue,
                other => return Err(GameError::UnknownColor(other.to_owned()).into()),
            };
            *slot += count;
        }
        Ok(set)
    }

    /// The smallest set holding both sets, color by color.
    fn union(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_within(self, limit: Self) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }
}

struct Game {
    id: u32,
    handfuls: Vec<CubeSet>,
}

impl Game {
    /// The fewest cubes of each color that make every handful possible.
    fn minimum_set(&self) -> CubeSet {
        self.handfuls
            .iter()
            .fold(CubeSet::default(), |minimum, &handful| minimum.union(handful))
    }
}

struct GameRecord(Vec<Game>);

impl ParseData for GameRecord {
    fn parse(input: &str) -> DynamicResult<Self> {
        let games = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let invalid = || GameError::InvalidGame(line.to_owned());
            let (label, handfuls) = line.split_once(':').ok_or_else(invalid)?;
            let id = label.strip_prefix("Game ").ok_or_else(invalid)?;

            Ok(Game {
                id: parse_with_context(id.trim())?,
                handfuls: handfuls
                    .split(';')
                    .map(CubeSet::parse_handful)
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(games))
    }
}

/*
For part 1, a game is possible if the bag held only 12 red, 13 green and 14 blue cubes. Sum the IDs
of the possible games.
*/

const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = GameRecord;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|game| game.minimum_set().fits_within(BAG))
            .map(|game| game.id)
            .checked_sum()
            .ok_or(GameError::Overflow)?)
    }
}

/*
For part 2, the power of a set is the product of its red, green and blue counts. Sum the powers of
each game's minimum set.
*/

impl Solution<PartTwo> for Day02 {
    type Input = GameRecord;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let powers: Vec<u32> = input
            .0
            .iter()
            .map(|game| {
                let CubeSet { red, green, blue } = game.minimum_set();
                [red, green, blue]
                    .into_iter()
                    .checked_product()
                    .ok_or(GameError::Overflow)
            })
            .collect::<Result<_, _>>()?;
        Ok(powers
            .into_iter()
            .checked_sum()
            .ok_or(GameError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = GameRecord::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartOne>>::solve(&parsed)?, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = GameRecord::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartTwo>>::solve(&parsed)?, 2286);
        Ok(())
    }

    #[test]
    fn unknown_colors_are_rejected() {
        assert!(GameRecord::parse("Game 1: 3 purple").is_err());
    }
}
