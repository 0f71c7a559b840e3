use std::collections::VecDeque;
use std::num::TryFromIntError;

use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 12: Hill Climbing Algorithm",
    parsed = Heightmap,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2022<12> {}

#[derive(thiserror::Error, Debug)]
enum HeightmapError {
    #[error("unexpected square {0:?}, expected a lowercase letter, 'S' or 'E'")]
    InvalidSquare(char),

    #[error("expected rows of {expected} squares, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("heightmap needs exactly one {0:?} square")]
    MarkerCount(char),

    #[error("no path reaches the destination")]
    Unreachable,

    #[error("heightmap is too large")]
    TooLarge(#[source] TryFromIntError),
}

/*
Input is a heightmap grid. Each square is an elevation from `a` (lowest) to `z` (highest). `S` marks
the current position with elevation `a`, and `E` the best signal location with elevation `z`.

A step moves up, down, left or right, and may climb at most one elevation higher (descending any
amount is allowed).
*/

type Elevation = u8;

struct Heightmap {
    width: i32,
    height: i32,
    /// Elevations in row-major order, `0` for `a`.
    elevations: Vec<Elevation>,
    start: Point2<i32>,
    end: Point2<i32>,
}

impl ParseData for Heightmap {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let mut start = Vec::new();
        let mut end = Vec::new();
        let mut elevations = Vec::new();

        let rows = parse_input_lines(input, |line_index, line| {
            let line = line.trim();
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(HeightmapError::RaggedRow {
                    expected,
                    found: line.len(),
                });
            }
            let y = i32::try_from(line_index).map_err(HeightmapError::TooLarge)?;
            for (x, square) in (0..).zip(line.chars()) {
                let elevation = match square {
                    'S' => {
                        start.push(Point2::new(x, y));
                        'a'
                    }
                    'E' => {
                        end.push(Point2::new(x, y));
                        'z'
                    }
                    'a'..='z' => square,
                    other => return Err(HeightmapError::InvalidSquare(other)),
                };
                elevations.push(elevation as u8 - b'a');
            }
            Ok(())
        })
        .try_fold(0usize, |rows, line| line.map(|()| rows + 1))?;

        let (&[start], &[end]) = (start.as_slice(), end.as_slice()) else {
            let missing = if start.len() == 1 { 'E' } else { 'S' };
            return Err(HeightmapError::MarkerCount(missing).into());
        };
        Ok(Self {
            width: i32::try_from(width.unwrap_or_default()).map_err(HeightmapError::TooLarge)?,
            height: i32::try_from(rows).map_err(HeightmapError::TooLarge)?,
            elevations,
            start,
            end,
        })
    }
}

impl Heightmap {
    fn index(&self, point: Point2<i32>) -> Option<usize> {
        if point.x < 0 || point.x >= self.width || point.y < 0 || point.y >= self.height {
            return None;
        }
        usize::try_from(point.y * self.width + point.x).ok()
    }

    fn elevation(&self, point: Point2<i32>) -> Option<Elevation> {
        self.index(point).map(|index| self.elevations[index])
    }

    /// Breadth-first search walking backward from the end, so a step from `from` to `to` is a
    /// climb of at most one from `to` up to `from`. Returns the fewest steps to the first square
    /// matching `is_goal`.
    fn steps_from_end(
        &self,
        is_goal: impl Fn(Point2<i32>) -> bool,
    ) -> Result<usize, HeightmapError> {
        let steps = [Vector2::y() * -1, Vector2::x(), Vector2::y(), Vector2::x() * -1];
        let mut visited = vec![false; self.elevations.len()];
        let mut queue = VecDeque::new();
        if let Some(index) = self.index(self.end) {
            visited[index] = true;
            queue.push_back((self.end, 0));
        }

        while let Some((point, distance)) = queue.pop_front() {
            if is_goal(point) {
                tracing::debug!(x = point.x, y = point.y, distance, "reached goal");
                return Ok(distance);
            }
            let Some(elevation) = self.elevation(point) else {
                continue;
            };
            for step in steps {
                let neighbor = point + step;
                let Some(index) = self.index(neighbor) else {
                    continue;
                };
                let climbable = elevation <= self.elevations[index] + 1;
                if climbable && !visited[index] {
                    visited[index] = true;
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }
        Err(HeightmapError::Unreachable)
    }
}

/*
For part 1, find the fewest steps from `S` to `E`.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Heightmap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.steps_from_end(|point| point == input.start)?)
    }
}

/*
For part 2, find the fewest steps to `E` from any square of elevation `a`.
*/

impl Solution<PartTwo> for Day12 {
    type Input = Heightmap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.steps_from_end(|point| input.elevation(point) == Some(0))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Heightmap::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day12 as Solution<PartOne>>::solve(&parsed)?, 31);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Heightmap::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day12 as Solution<PartTwo>>::solve(&parsed)?, 29);
        Ok(())
    }

    #[test]
    fn walls_make_the_end_unreachable() -> DynamicResult<()> {
        let parsed = Heightmap::parse("SazE\n")?;
        assert!(<Day12 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn cliffs_around_the_end_make_it_unreachable() -> DynamicResult<()> {
        // only squares of `y` or `z` can climb onto `E`
        let parsed = Heightmap::parse("Sab\nacc\nccE\n")?;
        assert_eq!(parsed.end, Point2::new(2, 2));
        assert!(matches!(
            parsed.steps_from_end(|point| point == parsed.start),
            Err(HeightmapError::Unreachable)
        ));
        assert!(<Day12 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }
}
