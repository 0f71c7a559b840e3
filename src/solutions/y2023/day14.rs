use std::collections::HashMap;
use std::num::TryFromIntError;

use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 14: Parabolic Reflector Dish",
    parsed = Platform,
    part_one = Day14,
    part_two = Day14,
    answer_one = "109098",
    answer_two = "100064"
)]
impl super::AdventOfCode2023<14> {}

#[derive(thiserror::Error, Debug)]
enum PlatformError {
    #[error("unexpected tile {0:?}, expected 'O', '#' or '.'")]
    InvalidTile(char),

    #[error("expected rows of {expected} tiles, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("platform is too large")]
    TooLarge(#[source] TryFromIntError),
}

/*
Input is a platform of rounded rocks (`O`) that roll when tilted, cube-shaped rocks (`#`) that stay
put, and empty space (`.`). Tilting the platform rolls every rounded rock as far as it can go in that
direction.

The load on the north support beams is the sum, over rounded rocks, of the rows from the rock to the
south edge, counting the rock's own row.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tile {
    Rounded,
    Cube,
    Empty,
}

#[derive(Debug, Clone, Copy)]
enum Tilt {
    North,
    West,
    South,
    East,
}

impl Tilt {
    /// The way rounded rocks roll.
    fn to_vector2(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::y() * -1,
            Self::West => Vector2::x() * -1,
            Self::South => Vector2::y(),
            Self::East => Vector2::x(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Platform {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl ParseData for Platform {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let rows = parse_input_lines(input, |_, line| -> Result<_, PlatformError> {
            let row = line
                .trim()
                .chars()
                .map(|tile| match tile {
                    'O' => Ok(Tile::Rounded),
                    '#' => Ok(Tile::Cube),
                    '.' => Ok(Tile::Empty),
                    other => Err(PlatformError::InvalidTile(other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(PlatformError::RaggedRow {
                    expected,
                    found: row.len(),
                });
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width: i32::try_from(width.unwrap_or_default()).map_err(PlatformError::TooLarge)?,
            height: i32::try_from(rows.len()).map_err(PlatformError::TooLarge)?,
            tiles: rows.concat(),
        })
    }
}

impl Platform {
    fn index(&self, point: Point2<i32>) -> Option<usize> {
        if point.x < 0 || point.x >= self.width || point.y < 0 || point.y >= self.height {
            return None;
        }
        usize::try_from(point.y * self.width + point.x).ok()
    }

    /// Points on the edge rocks roll toward, one per lane they roll along.
    fn lane_starts(&self, tilt: Tilt) -> Vec<Point2<i32>> {
        let (width, height) = (self.width, self.height);
        match tilt {
            Tilt::North => (0..width).map(|x| Point2::new(x, 0)).collect(),
            Tilt::South => (0..width).map(|x| Point2::new(x, height - 1)).collect(),
            Tilt::West => (0..height).map(|y| Point2::new(0, y)).collect(),
            Tilt::East => (0..height).map(|y| Point2::new(width - 1, y)).collect(),
        }
    }

    fn tilt(&mut self, tilt: Tilt) {
        let back = tilt.to_vector2() * -1;
        for start in self.lane_starts(tilt) {
            // the nearest point a rounded rock can roll to
            let mut free = start;
            let mut point = start;
            while let Some(index) = self.index(point) {
                match self.tiles[index] {
                    Tile::Cube => free = point + back,
                    Tile::Rounded => {
                        if let Some(free_index) = self.index(free) {
                            self.tiles.swap(index, free_index);
                        }
                        free += back;
                    }
                    Tile::Empty => {}
                }
                point += back;
            }
        }
    }

    fn spin_cycle(&mut self) {
        for tilt in [Tilt::North, Tilt::West, Tilt::South, Tilt::East] {
            self.tilt(tilt);
        }
    }

    fn north_load(&self) -> i32 {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Point2::new(x, y)))
            .filter(|&point| {
                self.index(point)
                    .is_some_and(|index| self.tiles[index] == Tile::Rounded)
            })
            .map(|point| self.height - point.y)
            .sum()
    }
}

/*
For part 1, tilt the platform north and find the load on the north support beams.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = Platform;
    type Output = i32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut platform = input.clone();
        platform.tilt(Tilt::North);
        Ok(platform.north_load())
    }
}

/*
For part 2, a spin cycle tilts north, then west, then south, then east. Find the north load after
1000000000 spin cycles.

The platform soon falls into a repeating sequence of arrangements. Once an arrangement repeats, the
remaining cycles can be skipped by the length of the repetition.
*/

const SPIN_CYCLES: usize = 1_000_000_000;

impl Solution<PartTwo> for Day14 {
    type Input = Platform;
    type Output = i32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut platform = input.clone();
        let mut seen = HashMap::new();
        let mut cycle = 0;
        while cycle < SPIN_CYCLES {
            platform.spin_cycle();
            cycle += 1;
            if let Some(first_seen) = seen.insert(platform.tiles.clone(), cycle) {
                let period = cycle - first_seen;
                tracing::debug!(first_seen, period, "spin cycles repeat");
                let remaining = (SPIN_CYCLES - cycle) % period;
                for _ in 0..remaining {
                    platform.spin_cycle();
                }
                break;
            }
        }
        Ok(platform.north_load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Platform::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day14 as Solution<PartOne>>::solve(&parsed)?, 136);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Platform::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day14 as Solution<PartTwo>>::solve(&parsed)?, 64);
        Ok(())
    }

    #[test]
    fn rocks_roll_until_blocked() -> DynamicResult<()> {
        let mut platform = Platform::parse("O.#O.\n")?;
        platform.tilt(Tilt::East);
        assert_eq!(platform, Platform::parse(".O#.O\n")?);
        platform.tilt(Tilt::West);
        assert_eq!(platform, Platform::parse("O.#O.\n")?);
        Ok(())
    }

    #[test]
    fn one_spin_cycle_matches_example() -> DynamicResult<()> {
        let mut platform = Platform::parse(EXAMPLE_INPUT)?;
        platform.spin_cycle();
        let expected = Platform::parse(
            "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
",
        )?;
        assert_eq!(platform, expected);
        Ok(())
    }
}
