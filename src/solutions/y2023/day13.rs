use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_lines_with_offset, split_blocks};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 13: Point of Incidence",
    parsed = Valley,
    part_one = Day13,
    part_two = Day13,
    answer_one = "32723",
    answer_two = "34536"
)]
impl super::AdventOfCode2023<13> {}

#[derive(thiserror::Error, Debug)]
enum ValleyError {
    #[error("unexpected terrain {0:?}, expected '.' or '#'")]
    InvalidTerrain(char),

    #[error("patterns must be rectangles at most 64 wide, found a row of {0}")]
    InvalidWidth(usize),

    #[error("patterns must be at most 64 rows tall, found {0} rows")]
    TooTall(usize),

    #[error("pattern starting on line {0} has no line of reflection")]
    NoReflection(usize),

    #[error("summary overflowed")]
    Overflow,
}

/*
Input is a set of patterns of ash (`.`) and rocks (`#`), separated by blank lines. Each pattern has
one line of reflection, either between two columns or between two rows. Rows or columns past an
edge of the pattern are ignored when checking the reflection.

A pattern's summary is the number of columns left of a vertical line of reflection, or 100 times the
number of rows above a horizontal one. Answers sum the summaries.
*/

fn to_mask(bits: impl Iterator<Item = bool>) -> u64 {
    bits.fold(0, |mask, bit| (mask << 1) | u64::from(bit))
}

/// A pattern stored twice, as bits per row and as bits per column.
struct Pattern {
    line: usize,
    rows: Vec<u64>,
    columns: Vec<u64>,
}

impl Pattern {
    fn parse(line_offset: usize, text: &str) -> DynamicResult<Self> {
        let rows = parse_lines_with_offset(text, line_offset, |_, line| -> DynamicResult<_> {
            let line = line.trim();
            let mut bits = Vec::with_capacity(line.len());
            for terrain in line.chars() {
                bits.push(match terrain {
                    '#' => true,
                    '.' => false,
                    other => return Err(ValleyError::InvalidTerrain(other).into()),
                });
            }
            Ok(bits)
        })
        .collect::<Result<Vec<_>, _>>()?;

        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width || row.len() > 64) {
            return Err(ValleyError::InvalidWidth(row.len()).into());
        }
        if rows.len() > 64 {
            return Err(ValleyError::TooTall(rows.len()).into());
        }

        Ok(Self {
            line: line_offset + 1,
            columns: (0..width)
                .map(|column| to_mask(rows.iter().map(|row| row[column])))
                .collect(),
            rows: rows
                .iter()
                .map(|row| to_mask(row.iter().copied()))
                .collect(),
        })
    }

    fn summary(&self, smudges: u32) -> Result<usize, ValleyError> {
        reflection(&self.columns, smudges)
            .or_else(|| reflection(&self.rows, smudges).map(|rows| rows * 100))
            .ok_or(ValleyError::NoReflection(self.line))
    }
}

/// Find the line of reflection across `lines`, allowing exactly `smudges` differing spots.
///
/// Returns the count of lines before the reflection.
fn reflection(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&split| {
        let (before, after) = lines.split_at(split);
        before
            .iter()
            .rev()
            .zip(after)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

struct Valley(Vec<Pattern>);

impl ParseData for Valley {
    fn parse(input: &str) -> DynamicResult<Self> {
        let patterns = split_blocks(input)
            .map(|block| Pattern::parse(block.line_offset, block.text))
            .collect::<Result<_, _>>()?;
        Ok(Self(patterns))
    }
}

impl Valley {
    fn summarize(&self, smudges: u32) -> Result<usize, ValleyError> {
        let summaries = self
            .0
            .iter()
            .map(|pattern| pattern.summary(smudges))
            .collect::<Result<Vec<_>, _>>()?;
        summaries
            .into_iter()
            .checked_sum()
            .ok_or(ValleyError::Overflow)
    }
}

/*
For part 1, sum the summaries of each pattern's line of reflection.
*/

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = Valley;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.summarize(0)?)
    }
}

/*
For part 2, every pattern has exactly one smudge: one spot of ash and rock swapped. Fixing it gives a
different line of reflection. Sum the summaries of those new lines.

A new line with the smudge fixed is a line where exactly one spot differs across it.
*/

impl Solution<PartTwo> for Day13 {
    type Input = Valley;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.summarize(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Valley::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day13 as Solution<PartOne>>::solve(&parsed)?, 405);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Valley::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day13 as Solution<PartTwo>>::solve(&parsed)?, 400);
        Ok(())
    }

    #[test]
    fn patterns_without_reflection_are_errors() -> DynamicResult<()> {
        let parsed = Valley::parse("#.\n.#\n..\n")?;
        assert!(parsed.summarize(0).is_err());
        Ok(())
    }
}
