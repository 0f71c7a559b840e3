use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 6: Tuning Trouble",
    part_one = Day06,
    part_two = Day06,
    answer_one = "1275",
    answer_two = "3605"
)]
impl super::AdventOfCode2022<6> {}

#[derive(thiserror::Error, Debug)]
enum DatastreamError {
    #[error("datastream characters must be lowercase letters, found {0:?}")]
    InvalidCharacter(char),

    #[error("no window of {0} distinct characters in the datastream")]
    NoMarker(usize),
}

/*
Input is a single line, a datastream buffer of lowercase letters.

A marker is a window of distinct characters. Report how many characters have been processed when
the first marker is complete, i.e. the position just after the window.
*/

/// Find the end of the first window of `size` distinct letters.
///
/// Keeps a count of each letter in the sliding window, and how many letters have a non-zero count.
fn find_marker(datastream: &str, size: usize) -> Result<usize, DatastreamError> {
    let letters: Vec<usize> = datastream
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' => Ok(c as usize - 'a' as usize),
            _ => Err(DatastreamError::InvalidCharacter(c)),
        })
        .collect::<Result<_, _>>()?;

    let mut counts = [0u16; 26];
    let mut distinct = 0;
    for (index, &letter) in letters.iter().enumerate() {
        if counts[letter] == 0 {
            distinct += 1;
        }
        counts[letter] += 1;

        if let Some(dropped_index) = index.checked_sub(size) {
            let dropped = letters[dropped_index];
            counts[dropped] -= 1;
            if counts[dropped] == 0 {
                distinct -= 1;
            }
        }

        if distinct == size {
            return Ok(index + 1);
        }
    }
    Err(DatastreamError::NoMarker(size))
}

/*
For part 1, find the start-of-packet marker, four distinct characters.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_marker(input, 4)?)
    }
}

/*
For part 2, find the start-of-message marker, fourteen distinct characters.
*/

impl Solution<PartTwo> for Day06 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_marker(input, 14)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        assert_eq!(<Day06 as Solution<PartOne>>::solve(EXAMPLE_INPUT)?, 7);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        assert_eq!(<Day06 as Solution<PartTwo>>::solve(EXAMPLE_INPUT)?, 19);
        Ok(())
    }

    #[test]
    fn other_streams_find_markers() -> DynamicResult<()> {
        assert_eq!(find_marker("bvwbjplbgvbhsrlpgdmjqwftvncz", 4)?, 5);
        assert_eq!(find_marker("nppdvjthqldpwncqszvftbrmjlhg", 14)?, 23);
        assert!(find_marker("aaaa", 2).is_err());
        Ok(())
    }
}
