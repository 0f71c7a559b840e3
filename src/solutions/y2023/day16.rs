use std::num::TryFromIntError;

use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 16: The Floor Will Be Lava",
    parsed = Contraption,
    part_one = Day16,
    part_two = Day16,
    answer_one = "6978",
    answer_two = "7315"
)]
impl super::AdventOfCode2023<16> {}

#[derive(thiserror::Error, Debug)]
enum ContraptionError {
    #[error("unexpected tile {0:?}")]
    InvalidTile(char),

    #[error("expected rows of {expected} tiles, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("contraption is empty")]
    Empty,

    #[error("contraption is too large")]
    TooLarge(#[source] TryFromIntError),
}

/*
Input is a contraption: a grid of empty space (`.`), mirrors (`/` and `\`) and splitters (`|` and
`-`).

A beam of light moves through empty space and through splitters met end-on. Mirrors reflect it 90
degrees. A splitter met on its flat side splits the beam into two going out of both ends. A tile is
energized if any beam passes through it.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn bit(self) -> u8 {
        1 << self as u8
    }

    fn to_vector2(self) -> Vector2<i32> {
        match self {
            Self::Up => Vector2::y() * -1,
            Self::Right => Vector2::x(),
            Self::Down => Vector2::y(),
            Self::Left => Vector2::x() * -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    /// `/`
    MirrorRising,
    /// `\`
    MirrorFalling,
    /// `|`
    SplitterVertical,
    /// `-`
    SplitterHorizontal,
}

impl Tile {
    /// Headings a beam leaves with after entering this tile.
    fn redirect(self, heading: Heading) -> ([Heading; 2], usize) {
        use Heading::{Down, Left, Right, Up};
        match (self, heading) {
            (Self::MirrorRising, Right) | (Self::MirrorFalling, Left) => ([Up, Up], 1),
            (Self::MirrorRising, Left) | (Self::MirrorFalling, Right) => ([Down, Down], 1),
            (Self::MirrorRising, Up) | (Self::MirrorFalling, Down) => ([Right, Right], 1),
            (Self::MirrorRising, Down) | (Self::MirrorFalling, Up) => ([Left, Left], 1),
            (Self::SplitterVertical, Left | Right) => ([Up, Down], 2),
            (Self::SplitterHorizontal, Up | Down) => ([Left, Right], 2),
            _ => ([heading, heading], 1),
        }
    }
}

struct Contraption {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl ParseData for Contraption {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let rows = parse_input_lines(input, |_, line| -> Result<_, ContraptionError> {
            let row = line
                .trim()
                .chars()
                .map(|tile| match tile {
                    '.' => Ok(Tile::Empty),
                    '/' => Ok(Tile::MirrorRising),
                    '\\' => Ok(Tile::MirrorFalling),
                    '|' => Ok(Tile::SplitterVertical),
                    '-' => Ok(Tile::SplitterHorizontal),
                    other => Err(ContraptionError::InvalidTile(other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ContraptionError::RaggedRow {
                    expected,
                    found: row.len(),
                });
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

        let width = width.unwrap_or_default();
        if width == 0 {
            return Err(ContraptionError::Empty.into());
        }
        Ok(Self {
            width: i32::try_from(width).map_err(ContraptionError::TooLarge)?,
            height: i32::try_from(rows.len()).map_err(ContraptionError::TooLarge)?,
            tiles: rows.concat(),
        })
    }
}

impl Contraption {
    /// Index of the tile at `point`, or `None` when the point is off the grid.
    fn index(&self, point: Point2<i32>) -> Option<usize> {
        if point.x < 0 || point.x >= self.width || point.y < 0 || point.y >= self.height {
            return None;
        }
        usize::try_from(point.y * self.width + point.x).ok()
    }

    /// Count the tiles energized by a beam entering at `start` with `heading`.
    fn energized(&self, start: Point2<i32>, heading: Heading) -> usize {
        // headings that beams have entered each tile with, as bits
        let mut entered = vec![0u8; self.tiles.len()];
        let mut beams = vec![(start, heading)];

        while let Some((point, heading)) = beams.pop() {
            let Some(index) = self.index(point) else {
                continue;
            };
            if entered[index] & heading.bit() != 0 {
                continue;
            }
            entered[index] |= heading.bit();

            let (headings, count) = self.tiles[index].redirect(heading);
            for &next_heading in &headings[..count] {
                beams.push((point + next_heading.to_vector2(), next_heading));
            }
        }
        entered.iter().filter(|&&headings| headings != 0).count()
    }
}

/*
For part 1, the beam enters the top-left tile heading right. Count the energized tiles.
*/

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = Contraption;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.energized(Point2::origin(), Heading::Right))
    }
}

/*
For part 2, the beam may enter from any edge tile, heading away from that edge. Find the most tiles
that can be energized.
*/

impl Solution<PartTwo> for Day16 {
    type Input = Contraption;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (width, height) = (input.width, input.height);
        let entries = (0..width)
            .flat_map(|x| {
                [
                    (Point2::new(x, 0), Heading::Down),
                    (Point2::new(x, height - 1), Heading::Up),
                ]
            })
            .chain((0..height).flat_map(|y| {
                [
                    (Point2::new(0, y), Heading::Right),
                    (Point2::new(width - 1, y), Heading::Left),
                ]
            }));

        Ok(entries
            .map(|(start, heading)| input.energized(start, heading))
            .max()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Contraption::parse(EXAMPLE_INPUT.trim_start())?;
        assert_eq!(<Day16 as Solution<PartOne>>::solve(&parsed)?, 46);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Contraption::parse(EXAMPLE_INPUT.trim_start())?;
        assert_eq!(<Day16 as Solution<PartTwo>>::solve(&parsed)?, 51);
        Ok(())
    }

    #[test]
    fn beams_loop_without_hanging() -> DynamicResult<()> {
        let parsed = Contraption::parse("-\\\n\\/\n")?;
        assert_eq!(parsed.energized(Point2::origin(), Heading::Right), 4);
        Ok(())
    }

    #[test]
    fn beams_leaving_the_grid_stop() -> DynamicResult<()> {
        let parsed = Contraption::parse("./.\n.|.\n")?;
        // the mirror in the top row sends the beam off the top edge
        assert_eq!(parsed.energized(Point2::origin(), Heading::Right), 2);
        // the splitter sends one beam off the bottom edge and one up to the mirror
        assert_eq!(parsed.energized(Point2::new(0, 1), Heading::Right), 4);
        assert_eq!(parsed.index(Point2::new(3, 0)), None);
        assert_eq!(parsed.index(Point2::new(1, -1)), None);
        Ok(())
    }
}
