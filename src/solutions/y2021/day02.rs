use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(title = "Day 2: Dive!", parsed = Course, part_one = Day02, part_two = Day02)]
impl super::AdventOfCode2021<2> {}

#[derive(thiserror::Error, Debug)]
enum CommandError {
    #[error("expected a direction and units separated by a space, found {0:?}")]
    MissingUnits(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("position went out of range")]
    Overflow,
}

/*
Input is a planned course for the submarine, one command per line: a direction (`forward`, `down`
or `up`) and a number of units.
*/

type Units = i64;

#[derive(Debug, Clone, Copy)]
enum Command {
    Forward(Units),
    Down(Units),
    Up(Units),
}

struct Course(Vec<Command>);

impl ParseData for Course {
    fn parse(input: &str) -> DynamicResult<Self> {
        let commands = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (direction, units) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| CommandError::MissingUnits(line.to_owned()))?;
            let units: Units = parse_with_context(units)?;

            let command = match direction {
                "forward" => Command::Forward(units),
                "down" => Command::Down(units),
                "up" => Command::Up(units),
                other => return Err(CommandError::UnknownDirection(other.to_owned()).into()),
            };
            Ok(command)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(commands))
    }
}

/// The horizontal position and depth of the submarine.
#[derive(Debug, Default)]
struct Position {
    horizontal: Units,
    depth: Units,
}

impl Position {
    fn product(&self) -> Result<Units, CommandError> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or(CommandError::Overflow)
    }
}

/*
For part 1, `forward` increases the horizontal position, and `down`/`up` increase/decrease the
depth. Multiply the final horizontal position by the final depth.
*/

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Course;
    type Output = Units;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = Position::default();
        for command in &input.0 {
            match *command {
                Command::Forward(units) => position.horizontal += units,
                Command::Down(units) => position.depth += units,
                Command::Up(units) => position.depth -= units,
            }
        }
        Ok(position.product()?)
    }
}

/*
For part 2, `down`/`up` change the aim instead. `forward` increases the horizontal position and
changes the depth by the aim multiplied by the units.
*/

impl Solution<PartTwo> for Day02 {
    type Input = Course;
    type Output = Units;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = Position::default();
        let mut aim: Units = 0;
        for command in &input.0 {
            match *command {
                Command::Forward(units) => {
                    position.horizontal += units;
                    let descent = aim.checked_mul(units).ok_or(CommandError::Overflow)?;
                    position.depth += descent;
                }
                Command::Down(units) => aim += units,
                Command::Up(units) => aim -= units,
            }
        }
        tracing::debug!(?position, aim, "course finished");
        Ok(position.product()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Course::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartOne>>::solve(&parsed)?, 150);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Course::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartTwo>>::solve(&parsed)?, 900);
        Ok(())
    }

    #[test]
    fn unknown_direction_is_rejected() {
        assert!(Course::parse("backward 3").is_err());
    }
}
