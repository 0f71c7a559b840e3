use std::collections::HashSet;

use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 9: Rope Bridge",
    parsed = Motions,
    part_one = Day09,
    part_two = Day09,
    answer_one = "6464",
    answer_two = "2604"
)]
impl super::AdventOfCode2022<9> {}

#[derive(thiserror::Error, Debug)]
enum MotionError {
    #[error("expected a direction and step count like \"R 4\", found {0:?}")]
    InvalidMotion(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

/*
Input is a series of motions of the head of a rope, one per line: a direction (`U`, `D`, `L`, `R`)
and a number of steps.

Each knot follows the knot ahead of it. If they stop touching (including diagonally), the knot
moves one step toward the knot ahead on each axis, so it moves diagonally when not in the same row
or column.
*/

type Coordinate = i32;

struct Motion {
    direction: Vector2<Coordinate>,
    steps: u32,
}

struct Motions(Vec<Motion>);

impl ParseData for Motions {
    fn parse(input: &str) -> DynamicResult<Self> {
        let motions = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (direction, steps) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| MotionError::InvalidMotion(line.to_owned()))?;
            let direction = match direction {
                "U" => Vector2::new(0, 1),
                "D" => Vector2::new(0, -1),
                "L" => Vector2::new(-1, 0),
                "R" => Vector2::new(1, 0),
                other => return Err(MotionError::UnknownDirection(other.to_owned()).into()),
            };
            Ok(Motion {
                direction,
                steps: parse_with_context(steps)?,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(motions))
    }
}

/// Move a knot to keep touching the knot ahead of it.
fn follow(knot: &mut Point2<Coordinate>, ahead: Point2<Coordinate>) {
    let gap = ahead - *knot;
    if gap.x.abs() > 1 || gap.y.abs() > 1 {
        *knot += gap.map(Coordinate::signum);
    }
}

/// Simulate a rope of `knot_count` knots and count the positions the tail visits.
fn count_tail_positions(motions: &Motions, knot_count: usize) -> usize {
    let mut knots = vec![Point2::origin(); knot_count];
    let mut visited = HashSet::from([Point2::origin()]);

    for motion in &motions.0 {
        for _ in 0..motion.steps {
            knots[0] += motion.direction;
            for index in 1..knot_count {
                let ahead = knots[index - 1];
                follow(&mut knots[index], ahead);
            }
            if let Some(&tail) = knots.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

/*
For part 1, the rope has two knots. Count the positions the tail visits at least once.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Motions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_tail_positions(input, 2))
    }
}

/*
For part 2, the rope has ten knots.
*/

impl Solution<PartTwo> for Day09 {
    type Input = Motions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_tail_positions(input, 10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    const LARGER_EXAMPLE_INPUT: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Motions::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day09 as Solution<PartOne>>::solve(&parsed)?, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Motions::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day09 as Solution<PartTwo>>::solve(&parsed)?, 1);
        Ok(())
    }

    #[test]
    fn part_two_solves_larger_example() -> DynamicResult<()> {
        let parsed = Motions::parse(LARGER_EXAMPLE_INPUT)?;
        assert_eq!(<Day09 as Solution<PartTwo>>::solve(&parsed)?, 36);
        Ok(())
    }
}
