use checked_sum::CheckedSum;
use puzzle_kit::parsing::parse_input_lines;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 1: Trebuchet?!",
    part_one = Day01,
    part_two = Day01,
    answer_one = "55488",
    answer_two = "55614"
)]
impl super::AdventOfCode2023<1> {}

#[derive(thiserror::Error, Debug)]
enum CalibrationError {
    #[error("no digit found in line")]
    NoDigit,

    #[error("calibration sum overflowed")]
    Overflow,
}

/*
Input is a calibration document. Each line holds a calibration value: the first digit and the last
digit of the line combined into a two-digit number. Answers sum the values of every line.
*/

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Read a digit starting at the beginning of `text`, optionally accepting spelled out digits.
fn digit_at(text: &str, spelled: bool) -> Option<u32> {
    let first = text.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .zip(1..)
        .find_map(|(word, value)| text.starts_with(word).then_some(value))
}

/// Find the calibration value of a line.
///
/// Digits are searched from each end independently, so spelled digits that share letters (like
/// `eightwo`) count as both.
fn calibration_value(line: &str, spelled: bool) -> Result<u32, CalibrationError> {
    let first = line
        .char_indices()
        .find_map(|(index, _)| digit_at(&line[index..], spelled))
        .ok_or(CalibrationError::NoDigit)?;
    let last = line
        .char_indices()
        .rev()
        .find_map(|(index, _)| digit_at(&line[index..], spelled))
        .ok_or(CalibrationError::NoDigit)?;
    Ok(first * 10 + last)
}

fn sum_calibration_values(input: &str, spelled: bool) -> DynamicResult<u32> {
    let values: Vec<u32> = parse_input_lines(input, |_, line| calibration_value(line, spelled))
        .collect::<Result<_, _>>()?;
    Ok(values
        .into_iter()
        .checked_sum()
        .ok_or(CalibrationError::Overflow)?)
}

/*
For part 1, only numeric digits count.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_calibration_values(input, false)
    }
}

/*
For part 2, digits spelled out with letters (`one` through `nine`) also count.
*/

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_calibration_values(input, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const SPELLED_EXAMPLE_INPUT: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        assert_eq!(<Day01 as Solution<PartOne>>::solve(EXAMPLE_INPUT)?, 142);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        assert_eq!(
            <Day01 as Solution<PartTwo>>::solve(SPELLED_EXAMPLE_INPUT)?,
            281
        );
        Ok(())
    }

    #[test]
    fn overlapping_words_count_from_both_ends() -> DynamicResult<()> {
        assert_eq!(calibration_value("eightwo", true)?, 82);
        assert_eq!(calibration_value("7", false)?, 77);
        Ok(())
    }
}
