use nalgebra::{Point2, Vector2};
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 10: Pipe Maze",
    parsed = PipeLoop,
    part_one = Day10,
    part_two = Day10,
    answer_one = "6968",
    answer_two = "413"
)]
impl super::AdventOfCode2023<10> {}

#[derive(thiserror::Error, Debug)]
enum PipeError {
    #[error("unexpected tile {0:?}")]
    InvalidTile(char),

    #[error("expected rows of {expected} tiles, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("maze needs exactly one starting tile 'S'")]
    StartCount,

    #[error("no pipe connects to the starting tile")]
    DisconnectedStart,

    #[error("the loop breaks at row {row}, column {column}")]
    BrokenLoop { row: Coordinate, column: Coordinate },
}

/*
Input is a grid of pipe tiles:

- `|` connects north and south, `-` connects east and west.
- `L` connects north and east, `J` north and west, `7` south and west, `F` south and east.
- `.` is ground, with no pipe.
- `S` is the starting position of the animal, on a pipe whose shape isn't shown.

The pipe through `S` is part of one large continuous loop.
*/

type Coordinate = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    fn to_vector2(self) -> Vector2<Coordinate> {
        match self {
            Self::North => Vector2::y() * -1,
            Self::East => Vector2::x(),
            Self::South => Vector2::y(),
            Self::West => Vector2::x() * -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Pipe([Direction; 2]),
    Ground,
    Start,
}

impl TryFrom<char> for Tile {
    type Error = PipeError;

    fn try_from(tile: char) -> Result<Self, Self::Error> {
        use Direction::{East, North, South, West};
        Ok(match tile {
            '|' => Self::Pipe([North, South]),
            '-' => Self::Pipe([East, West]),
            'L' => Self::Pipe([North, East]),
            'J' => Self::Pipe([North, West]),
            '7' => Self::Pipe([South, West]),
            'F' => Self::Pipe([South, East]),
            '.' => Self::Ground,
            'S' => Self::Start,
            other => return Err(PipeError::InvalidTile(other)),
        })
    }
}

struct Maze {
    width: Coordinate,
    height: Coordinate,
    tiles: Vec<Tile>,
}

impl Maze {
    fn tile(&self, point: Point2<Coordinate>) -> Option<Tile> {
        if point.x < 0 || point.x >= self.width || point.y < 0 || point.y >= self.height {
            return None;
        }
        let index = usize::try_from(point.y * self.width + point.x).ok()?;
        self.tiles.get(index).copied()
    }

    fn connects(&self, point: Point2<Coordinate>, direction: Direction) -> bool {
        matches!(self.tile(point), Some(Tile::Pipe(ends)) if ends.contains(&direction))
    }

    fn broken_at(point: Point2<Coordinate>) -> PipeError {
        PipeError::BrokenLoop {
            row: point.y + 1,
            column: point.x + 1,
        }
    }

    /// Follow the loop from `start` back to itself, returning the tiles in order.
    fn trace_loop(
        &self,
        start: Point2<Coordinate>,
    ) -> Result<Vec<Point2<Coordinate>>, PipeError> {
        let mut heading = Direction::ALL
            .into_iter()
            .find(|&direction| {
                self.connects(start + direction.to_vector2(), direction.opposite())
            })
            .ok_or(PipeError::DisconnectedStart)?;

        let mut points = vec![start];
        let mut point = start;
        loop {
            let next = point + heading.to_vector2();
            if next == start {
                return Ok(points);
            }
            let arrived_from = heading.opposite();
            heading = match self.tile(next) {
                Some(Tile::Pipe([a, b])) if a == arrived_from => b,
                Some(Tile::Pipe([a, b])) if b == arrived_from => a,
                _ => return Err(Self::broken_at(point)),
            };
            point = next;
            points.push(point);
        }
    }
}

/// The main loop, as tile positions in order around it.
struct PipeLoop {
    positions: Vec<Point2<Coordinate>>,
}

impl ParseData for PipeLoop {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let rows = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let line = line.trim();
            let expected = *width.get_or_insert(line.chars().count());
            let row = line
                .chars()
                .map(Tile::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            if row.len() != expected {
                return Err(PipeError::RaggedRow {
                    expected,
                    found: row.len(),
                }
                .into());
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

        let mut starts = Vec::new();
        for (y, row) in (0..).zip(&rows) {
            for (x, &tile) in (0..).zip(row) {
                if tile == Tile::Start {
                    starts.push(Point2::new(x, y));
                }
            }
        }
        let &[start] = starts.as_slice() else {
            return Err(PipeError::StartCount.into());
        };

        let maze = Maze {
            width: Coordinate::try_from(width.unwrap_or_default())?,
            height: Coordinate::try_from(rows.len())?,
            tiles: rows.concat(),
        };
        let positions = maze.trace_loop(start)?;
        tracing::debug!(length = positions.len(), "traced loop");
        Ok(Self { positions })
    }
}

/*
For part 1, find the number of steps along the loop to the tile farthest from the start.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = PipeLoop;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.positions.len() / 2)
    }
}

/*
For part 2, count the tiles enclosed by the loop. Pipes squeezed together still leave no room for a
tile between them.

The loop is a polygon with a vertex on each of its tiles. The shoelace formula gives its area, and
Pick's theorem relates that area to the count of points strictly inside:
`area = inside + boundary / 2 - 1`.
*/

impl Solution<PartTwo> for Day10 {
    type Input = PipeLoop;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let positions = &input.positions;
        let twice_area: i64 = positions
            .iter()
            .zip(positions.iter().cycle().skip(1))
            .map(|(point, next)| point.x * next.y - next.x * point.y)
            .sum();
        let boundary = i64::try_from(positions.len())?;
        Ok((twice_area.abs() - boundary) / 2 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_EXAMPLE_INPUT: &str = "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

    const COMPLEX_EXAMPLE_INPUT: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const ENCLOSED_EXAMPLE_INPUT: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const SQUEEZED_EXAMPLE_INPUT: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PipeLoop::parse(SIMPLE_EXAMPLE_INPUT)?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 4);
        let parsed = PipeLoop::parse(COMPLEX_EXAMPLE_INPUT)?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PipeLoop::parse(ENCLOSED_EXAMPLE_INPUT)?;
        assert_eq!(<Day10 as Solution<PartTwo>>::solve(&parsed)?, 4);
        Ok(())
    }

    #[test]
    fn squeezed_pipes_enclose_nothing_between_them() -> DynamicResult<()> {
        let parsed = PipeLoop::parse(SQUEEZED_EXAMPLE_INPUT)?;
        assert_eq!(<Day10 as Solution<PartTwo>>::solve(&parsed)?, 4);
        Ok(())
    }

    #[test]
    fn loop_is_traced_from_the_start() -> DynamicResult<()> {
        let parsed = PipeLoop::parse(SIMPLE_EXAMPLE_INPUT)?;
        assert_eq!(parsed.positions.len(), 8);
        assert_eq!(parsed.positions[..2], [Point2::new(1, 1), Point2::new(2, 1)]);
        Ok(())
    }

    #[test]
    fn pipes_leading_off_the_grid_break_the_loop() {
        let error = PipeLoop::parse("S-\n").err();
        let broken = error
            .as_deref()
            .and_then(|error| error.downcast_ref::<PipeError>());
        assert!(matches!(
            broken,
            Some(PipeError::BrokenLoop { row: 1, column: 2 })
        ));
    }

    #[test]
    fn start_must_be_unique() {
        assert!(PipeLoop::parse("S-S\n").is_err());
    }
}
