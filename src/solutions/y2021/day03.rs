use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 3: Binary Diagnostic",
    parsed = DiagnosticReport,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2021<3> {}

#[derive(thiserror::Error, Debug)]
enum DiagnosticError {
    #[error("expected a line of '0' and '1' characters, found {0:?}")]
    NotBinary(String),

    #[error("all lines should have the same width of {expected} bits, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("diagnostic numbers must be between 1 and 32 bits wide")]
    UnsupportedWidth,

    #[error("report is empty")]
    EmptyReport,
}

/*
Input is a diagnostic report: one binary number per line, all of the same width.
*/

type Reading = u32;

struct DiagnosticReport {
    /// The number of bits in each reading.
    width: usize,
    readings: Vec<Reading>,
}

impl ParseData for DiagnosticReport {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width = None;
        let readings: Vec<Reading> = parse_input_lines(input, |_, line| {
            let line = line.trim();
            if line.is_empty() || !line.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(DiagnosticError::NotBinary(line.to_owned()));
            }
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(DiagnosticError::WidthMismatch {
                    expected,
                    found: line.len(),
                });
            }
            if expected > 32 {
                return Err(DiagnosticError::UnsupportedWidth);
            }
            Reading::from_str_radix(line, 2)
                .map_err(|_| DiagnosticError::NotBinary(line.to_owned()))
        })
        .collect::<Result<_, _>>()?;

        let width = width.ok_or(DiagnosticError::EmptyReport)?;
        Ok(Self { width, readings })
    }
}

/// Check if a bit is set in a reading, counting bit positions from the most significant.
fn bit_set(reading: Reading, width: usize, position: usize) -> bool {
    (reading >> (width - 1 - position)) & 1 == 1
}

/// Whether `1` is the most common bit at a position, with ties going to `1`.
fn ones_are_most_common(readings: &[Reading], width: usize, position: usize) -> bool {
    let ones = readings
        .iter()
        .filter(|&&reading| bit_set(reading, width, position))
        .count();
    ones >= readings.len() - ones
}

/*
For part 1, the gamma rate has each bit set to the most common bit in that position among all
readings, and the epsilon rate uses the least common bit. Multiply them for the power consumption.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = DiagnosticReport;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let DiagnosticReport { width, readings } = input;
        let gamma = (0..*width).fold(0, |gamma: Reading, position| {
            (gamma << 1) | Reading::from(ones_are_most_common(readings, *width, position))
        });
        let mask = Reading::MAX >> (Reading::BITS as usize - width);
        let epsilon = !gamma & mask;
        Ok(u64::from(gamma) * u64::from(epsilon))
    }
}

/*
For part 2, ratings are found by filtering the readings bit by bit from the left, keeping readings
that match a bit criteria until one remains.
- The oxygen generator rating keeps the most common bit, `1` on ties.
- The CO2 scrubber rating keeps the least common bit, `0` on ties.

Multiply the two ratings for the life support rating.
*/

/// Filter readings down to a single rating, keeping those matching the bit chosen by `keep_ones`
/// for each position.
fn find_rating(
    report: &DiagnosticReport,
    keep_ones: impl Fn(bool) -> bool,
) -> Result<Reading, DiagnosticError> {
    let mut remaining = report.readings.clone();
    for position in 0..report.width {
        if remaining.len() <= 1 {
            break;
        }
        let wanted = keep_ones(ones_are_most_common(&remaining, report.width, position));
        remaining.retain(|&reading| bit_set(reading, report.width, position) == wanted);
    }
    remaining.first().copied().ok_or(DiagnosticError::EmptyReport)
}

impl Solution<PartTwo> for Day03 {
    type Input = DiagnosticReport;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let oxygen = find_rating(input, |ones_most_common| ones_most_common)?;
        let carbon_dioxide = find_rating(input, |ones_most_common| !ones_most_common)?;
        tracing::debug!(oxygen, carbon_dioxide, "found ratings");
        Ok(u64::from(oxygen) * u64::from(carbon_dioxide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = DiagnosticReport::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 198);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = DiagnosticReport::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&parsed)?, 230);
        Ok(())
    }

    #[test]
    fn mixed_widths_are_rejected() {
        assert!(DiagnosticReport::parse("0101\n101\n").is_err());
    }
}
