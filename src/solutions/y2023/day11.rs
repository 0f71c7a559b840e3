use itertools::Itertools;
use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 11: Cosmic Expansion",
    parsed = Image,
    part_one = Day11,
    part_two = Day11,
    answer_one = "10276166",
    answer_two = "598693078798"
)]
impl super::AdventOfCode2023<11> {}

#[derive(thiserror::Error, Debug)]
enum ImageError {
    #[error("unexpected pixel {0:?}, expected '.' or '#'")]
    InvalidPixel(char),

    #[error("image is too large")]
    TooLarge,
}

/*
Input is an image of space: `#` is a galaxy and `.` is empty space.

The universe has expanded since: every row and every column without a galaxy is actually wider. The
distance between two galaxies is the count of up, down, left and right steps between them in the
expanded universe.
*/

type Coordinate = i64;

struct Image {
    /// Galaxy positions, with `x` as column and `y` as row.
    galaxies: Vec<Point2<Coordinate>>,
}

impl ParseData for Image {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rows = parse_input_lines(input, |row, line| -> DynamicResult<_> {
            let y = Coordinate::try_from(row).map_err(|_| ImageError::TooLarge)?;
            let mut galaxies = Vec::new();
            for (column, pixel) in line.trim().chars().enumerate() {
                match pixel {
                    '#' => {
                        let x = Coordinate::try_from(column).map_err(|_| ImageError::TooLarge)?;
                        galaxies.push(Point2::new(x, y));
                    }
                    '.' => {}
                    other => return Err(ImageError::InvalidPixel(other).into()),
                }
            }
            Ok(galaxies)
        })
        .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            galaxies: rows.concat(),
        })
    }
}

/// For each coordinate up to the largest occupied one, how many coordinates before it are empty.
fn empty_before(occupied: impl Iterator<Item = Coordinate>) -> Vec<Coordinate> {
    let occupied: Vec<_> = occupied.sorted_unstable().dedup().collect();
    let mut counts = Vec::new();
    let mut empty = 0;
    for coordinate in 0..=occupied.last().copied().unwrap_or(0) {
        counts.push(empty);
        if occupied.binary_search(&coordinate).is_err() {
            empty += 1;
        }
    }
    counts
}

impl Image {
    /// Galaxy positions after each empty row and column grows to `factor` times its size.
    fn expanded(&self, factor: Coordinate) -> Vec<Point2<Coordinate>> {
        let empty_columns = empty_before(self.galaxies.iter().map(|galaxy| galaxy.x));
        let empty_rows = empty_before(self.galaxies.iter().map(|galaxy| galaxy.y));
        let growth = factor - 1;
        self.galaxies
            .iter()
            .map(|galaxy| {
                // coordinates are indexes from parsing, so always within the tables
                let shift = Vector2::new(
                    empty_columns[galaxy.x as usize],
                    empty_rows[galaxy.y as usize],
                );
                galaxy + shift * growth
            })
            .collect()
    }

    fn sum_of_distances(&self, factor: Coordinate) -> Coordinate {
        self.expanded(factor)
            .iter()
            .tuple_combinations()
            .map(|(a, b)| (b - a).map(Coordinate::abs).sum())
            .sum()
    }
}

/*
For part 1, each empty row or column is twice as big. Sum the distances between every pair of
galaxies.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Image;
    type Output = Coordinate;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.sum_of_distances(2))
    }
}

/*
For part 2, each empty row or column is one million times as big.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Image;
    type Output = Coordinate;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.sum_of_distances(1_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Image::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day11 as Solution<PartOne>>::solve(&parsed)?, 374);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Image::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day11 as Solution<PartTwo>>::solve(&parsed)?, 82_000_210);
        Ok(())
    }

    #[test]
    fn smaller_expansions_match_example() -> DynamicResult<()> {
        let parsed = Image::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.sum_of_distances(10), 1030);
        assert_eq!(parsed.sum_of_distances(100), 8410);
        Ok(())
    }
}
