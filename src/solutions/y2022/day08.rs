use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 8: Treetop Tree House",
    parsed = Forest,
    part_one = Day08,
    part_two = Day08,
    answer_one = "1533",
    answer_two = "345744"
)]
impl super::AdventOfCode2022<8> {}

#[derive(thiserror::Error, Debug)]
enum ForestError {
    #[error("tree heights must be digits, found {0:?}")]
    InvalidHeight(char),

    #[error("expected rows of {expected} trees, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("forest has no trees")]
    Empty,
}

/*
Input is a height map of trees in a rectangular grid, one digit (0 to 9) per tree.
*/

/// The four directions to look from a tree, as row and column steps.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

struct Forest {
    width: usize,
    /// Heights in row-major order.
    heights: Vec<u8>,
}

impl ParseData for Forest {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let rows: Vec<Vec<u8>> = parse_input_lines(input, |_, line| {
            let row = line
                .trim()
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or(ForestError::InvalidHeight(c))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ForestError::RaggedRow {
                    expected,
                    found: row.len(),
                });
            }
            Ok(row)
        })
        .collect::<Result<_, _>>()?;

        let width = width.filter(|&w| w > 0).ok_or(ForestError::Empty)?;
        Ok(Self {
            width,
            heights: rows.concat(),
        })
    }
}

impl Forest {
    fn height(&self) -> usize {
        self.heights.len() / self.width
    }

    fn tree(&self, row: usize, column: usize) -> u8 {
        self.heights[row * self.width + column]
    }

    /// Iterate the heights of trees in a line of sight, starting next to the given tree and ending at
    /// the forest edge.
    fn line_of_sight(
        &self,
        row: usize,
        column: usize,
        (row_step, column_step): (isize, isize),
    ) -> impl Iterator<Item = u8> + '_ {
        (1..).map_while(move |distance: isize| {
            let next_row = row.checked_add_signed(row_step * distance)?;
            let next_column = column.checked_add_signed(column_step * distance)?;
            (next_row < self.height() && next_column < self.width)
                .then(|| self.tree(next_row, next_column))
        })
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(|row| (0..self.width).map(move |column| (row, column)))
    }
}

/*
For part 1, a tree is visible if all trees between it and an edge of the grid, in any of the four
directions, are shorter than it. Count the visible trees.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Forest;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .positions()
            .filter(|&(row, column)| {
                let height = input.tree(row, column);
                DIRECTIONS.iter().any(|&direction| {
                    input
                        .line_of_sight(row, column, direction)
                        .all(|other| other < height)
                })
            })
            .count())
    }
}

/*
For part 2, a tree's viewing distance in a direction counts trees until the edge, or until the first
tree at least as tall (included). The scenic score is the product of the four viewing distances.
Find the highest scenic score.
*/

impl Forest {
    fn scenic_score(&self, row: usize, column: usize) -> usize {
        let height = self.tree(row, column);
        DIRECTIONS
            .iter()
            .map(|&direction| {
                let mut seen = 0;
                for other in self.line_of_sight(row, column, direction) {
                    seen += 1;
                    if other >= height {
                        break;
                    }
                }
                seen
            })
            .product()
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = Forest;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .positions()
            .map(|(row, column)| input.scenic_score(row, column))
            .max()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
30373
25512
65332
33549
35390
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Forest::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day08 as Solution<PartOne>>::solve(&parsed)?, 21);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Forest::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 8);
        Ok(())
    }

    #[test]
    fn scenic_score_stops_at_tall_trees() -> DynamicResult<()> {
        let parsed = Forest::parse(EXAMPLE_INPUT)?;
        // the middle 5 in the second row
        assert_eq!(parsed.scenic_score(1, 2), 4);
        Ok(())
    }
}
