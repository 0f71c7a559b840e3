use std::collections::HashMap;

use checked_sum::CheckedSum;
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 3: Gear Ratios",
    parsed = Schematic,
    part_one = Day03,
    part_two = Day03,
    answer_one = "559667",
    answer_two = "86841457"
)]
impl super::AdventOfCode2023<3> {}

#[derive(thiserror::Error, Debug)]
enum SchematicError {
    #[error("expected rows of {expected} characters, found a row of {found}")]
    RaggedRow { expected: usize, found: usize },

    #[error("schematic characters must be ASCII")]
    NotAscii,

    #[error("part number {0:?} is too large")]
    NumberTooLarge(String),

    #[error("sum overflowed")]
    Overflow,
}

/*
Input is an engine schematic, a grid of characters. Digits form numbers read left to right, `.` is
empty, and anything else is a symbol.

A number is adjacent to a symbol if any of its digits touch the symbol, including diagonally.
*/

/// A number written in the schematic, with the symbols around it.
#[derive(Debug)]
struct SchematicNumber {
    value: u32,
    /// Positions (row-major indexes) and characters of adjacent symbols.
    adjacent_symbols: Vec<(usize, u8)>,
}

struct Schematic {
    numbers: Vec<SchematicNumber>,
}

impl ParseData for Schematic {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let rows: Vec<&[u8]> = parse_input_lines(input, |_, line| {
            let line = line.trim();
            if !line.is_ascii() {
                return Err(SchematicError::NotAscii);
            }
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(SchematicError::RaggedRow {
                    expected,
                    found: line.len(),
                });
            }
            Ok(line.as_bytes())
        })
        .collect::<Result<_, _>>()?;
        let width = width.unwrap_or_default();

        let is_symbol = |c: u8| c != b'.' && !c.is_ascii_digit();
        let mut numbers = Vec::new();

        for (row_index, row) in rows.iter().enumerate() {
            let mut column = 0;
            while column < width {
                if !row[column].is_ascii_digit() {
                    column += 1;
                    continue;
                }
                let start = column;
                while column < width && row[column].is_ascii_digit() {
                    column += 1;
                }
                let digits = &row[start..column];
                let value = digits
                    .iter()
                    .try_fold(0u32, |value, &digit| {
                        value.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
                    })
                    .ok_or_else(|| {
                        SchematicError::NumberTooLarge(String::from_utf8_lossy(digits).into_owned())
                    })?;

                // the box one square around the number, clipped to the grid
                let top = row_index.saturating_sub(1);
                let bottom = (row_index + 1).min(rows.len() - 1);
                let left = start.saturating_sub(1);
                let right = column.min(width - 1);
                let adjacent_symbols = (top..=bottom)
                    .flat_map(|r| (left..=right).map(move |c| (r, c)))
                    .filter(|&(r, c)| is_symbol(rows[r][c]))
                    .map(|(r, c)| (r * width + c, rows[r][c]))
                    .collect();

                numbers.push(SchematicNumber {
                    value,
                    adjacent_symbols,
                });
            }
        }
        Ok(Self { numbers })
    }
}

/*
For part 1, sum the numbers adjacent to at least one symbol. These are the part numbers.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Schematic;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .numbers
            .iter()
            .filter(|number| !number.adjacent_symbols.is_empty())
            .map(|number| number.value)
            .checked_sum()
            .ok_or(SchematicError::Overflow)?)
    }
}

/*
For part 2, a gear is a `*` adjacent to exactly two part numbers, and its gear ratio is the product
of the two. Sum all gear ratios.
*/

impl Solution<PartTwo> for Day03 {
    type Input = Schematic;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut numbers_by_star: HashMap<usize, Vec<u32>> = HashMap::new();
        for number in &input.numbers {
            for &(position, symbol) in &number.adjacent_symbols {
                if symbol == b'*' {
                    numbers_by_star
                        .entry(position)
                        .or_default()
                        .push(number.value);
                }
            }
        }

        Ok(numbers_by_star
            .values()
            .filter_map(|numbers| match numbers.as_slice() {
                &[a, b] => Some(u64::from(a) * u64::from(b)),
                _ => None,
            })
            .checked_sum()
            .ok_or(SchematicError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&parsed)?, 467_835);
        Ok(())
    }

    #[test]
    fn numbers_at_the_right_edge_are_read() -> DynamicResult<()> {
        let parsed = Schematic::parse("..12\n.#..\n")?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 12);
        Ok(())
    }
}
