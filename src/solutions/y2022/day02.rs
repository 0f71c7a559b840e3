use checked_sum::CheckedSum;
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 2: Rock Paper Scissors",
    parsed = StrategyGuide,
    part_one = Day02,
    part_two = Day02,
    answer_one = "15337",
    answer_two = "11696"
)]
impl super::AdventOfCode2022<2> {}

#[derive(thiserror::Error, Debug)]
enum StrategyError {
    #[error("expected two letters separated by a space, found {0:?}")]
    InvalidRound(String),

    #[error("opponent column must be A, B or C, found {0:?}")]
    UnknownOpponentShape(char),

    #[error("response column must be X, Y or Z, found {0:?}")]
    UnknownResponse(char),

    #[error("total score overflowed")]
    ScoreOverflow,
}

/*
Input is an encrypted strategy guide for a rock paper scissors tournament. Each line is a round: the
opponent's shape (`A` rock, `B` paper, `C` scissors), a space, then a response column (`X`, `Y` or
`Z`) whose meaning differs between parts.

A round scores the value of the shape played (1 rock, 2 paper, 3 scissors) plus the outcome (0 loss,
3 draw, 6 win).
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> u32 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The shape that beats this one.
    fn beaten_by(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    /// The shape this one beats.
    fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn score(self) -> u32 {
        match self {
            Self::Loss => 0,
            Self::Draw => 3,
            Self::Win => 6,
        }
    }

    /// The outcome of playing `mine` against `theirs`.
    fn of_round(theirs: Shape, mine: Shape) -> Self {
        if mine == theirs {
            Self::Draw
        } else if mine == theirs.beaten_by() {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

/// The second column of a round, interpreted per part.
#[derive(Debug, Clone, Copy)]
enum Response {
    X,
    Y,
    Z,
}

struct Round {
    opponent: Shape,
    response: Response,
}

struct StrategyGuide(Vec<Round>);

impl ParseData for StrategyGuide {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rounds = parse_input_lines(input, |_, line| {
            let mut chars = line.trim().chars();
            let (Some(opponent), Some(' '), Some(response), None) =
                (chars.next(), chars.next(), chars.next(), chars.next())
            else {
                return Err(StrategyError::InvalidRound(line.to_owned()));
            };

            let opponent = match opponent {
                'A' => Shape::Rock,
                'B' => Shape::Paper,
                'C' => Shape::Scissors,
                other => return Err(StrategyError::UnknownOpponentShape(other)),
            };
            let response = match response {
                'X' => Response::X,
                'Y' => Response::Y,
                'Z' => Response::Z,
                other => return Err(StrategyError::UnknownResponse(other)),
            };
            Ok(Round { opponent, response })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rounds))
    }
}

/// Total the score of every round, given how a round decides the shape to play.
fn total_score(
    guide: &StrategyGuide,
    choose_shape: impl Fn(&Round) -> Shape,
) -> Result<u32, StrategyError> {
    guide
        .0
        .iter()
        .map(|round| {
            let mine = choose_shape(round);
            mine.score() + Outcome::of_round(round.opponent, mine).score()
        })
        .checked_sum()
        .ok_or(StrategyError::ScoreOverflow)
}

/*
For part 1, the response column is the shape to play: `X` rock, `Y` paper, `Z` scissors.
*/

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = StrategyGuide;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_score(input, |round| match round.response {
            Response::X => Shape::Rock,
            Response::Y => Shape::Paper,
            Response::Z => Shape::Scissors,
        })?)
    }
}

/*
For part 2, the response column is the outcome needed: `X` lose, `Y` draw, `Z` win. Play the shape
that gets that outcome.
*/

impl Solution<PartTwo> for Day02 {
    type Input = StrategyGuide;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_score(input, |round| match round.response {
            Response::X => round.opponent.beats(),
            Response::Y => round.opponent,
            Response::Z => round.opponent.beaten_by(),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
A Y
B X
C Z
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = StrategyGuide::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartOne>>::solve(&parsed)?, 15);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = StrategyGuide::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day02 as Solution<PartTwo>>::solve(&parsed)?, 12);
        Ok(())
    }

    #[test]
    fn outcome_follows_shape_rules() {
        assert_eq!(Outcome::of_round(Shape::Rock, Shape::Paper), Outcome::Win);
        assert_eq!(Outcome::of_round(Shape::Rock, Shape::Scissors), Outcome::Loss);
        assert_eq!(Outcome::of_round(Shape::Scissors, Shape::Scissors), Outcome::Draw);
    }
}
