use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 12: Hot Springs",
    parsed = ConditionRecords,
    part_one = Day12,
    part_two = Day12,
    answer_one = "7379"
)]
impl super::AdventOfCode2023<12> {}

#[derive(thiserror::Error, Debug)]
enum SpringError {
    #[error("expected \"<springs> <group sizes>\", found {0:?}")]
    InvalidRecord(String),

    #[error("unexpected spring condition {0:?}, expected '.', '#' or '?'")]
    InvalidCondition(char),

    #[error("arrangement count overflowed")]
    Overflow,
}

/*
Input is a damaged record of springs. Each line shows the condition of a row of springs, operational
(`.`), damaged (`#`) or unknown (`?`), then the sizes of each contiguous group of damaged springs in
order:

```text
???.### 1,1,3
```

An arrangement replaces every unknown with operational or damaged so the groups match.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Operational,
    Damaged,
    Unknown,
}

#[derive(Debug, Clone)]
struct Record {
    springs: Vec<Condition>,
    groups: Vec<usize>,
}

impl Record {
    /// Count the arrangements matching the groups.
    ///
    /// `ways[i][g]` counts arrangements of the springs from `i` on holding the groups from `g` on,
    /// built from the end of the row backward.
    fn arrangements(&self) -> Result<u64, SpringError> {
        let springs = &self.springs;
        let groups = &self.groups;
        let (length, group_count) = (springs.len(), groups.len());

        let mut ways = vec![vec![0u64; group_count + 1]; length + 1];
        ways[length][group_count] = 1;

        for start in (0..length).rev() {
            for group in 0..=group_count {
                let mut count = 0u64;
                if springs[start] != Condition::Damaged {
                    count = ways[start + 1][group];
                }
                if springs[start] != Condition::Operational
                    && let Some(&size) = groups.get(group)
                {
                    let end = start + size;
                    let fits = end <= length
                        && !springs[start..end].contains(&Condition::Operational)
                        && springs.get(end) != Some(&Condition::Damaged);
                    if fits {
                        // the spring after a group must be operational, so skip it too
                        let next = (end + 1).min(length);
                        count = count
                            .checked_add(ways[next][group + 1])
                            .ok_or(SpringError::Overflow)?;
                    }
                }
                ways[start][group] = count;
            }
        }
        Ok(ways[0][0])
    }

    /// The record repeated five times, springs joined by unknowns.
    fn unfolded(&self) -> Self {
        let mut springs = Vec::with_capacity(self.springs.len() * 5 + 4);
        for copy in 0..5 {
            if copy > 0 {
                springs.push(Condition::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }
        Self {
            springs,
            groups: self.groups.repeat(5),
        }
    }
}

struct ConditionRecords(Vec<Record>);

impl ParseData for ConditionRecords {
    fn parse(input: &str) -> DynamicResult<Self> {
        let records = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (springs, groups) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| SpringError::InvalidRecord(line.to_owned()))?;
            Ok(Record {
                springs: springs
                    .chars()
                    .map(|condition| match condition {
                        '.' => Ok(Condition::Operational),
                        '#' => Ok(Condition::Damaged),
                        '?' => Ok(Condition::Unknown),
                        other => Err(SpringError::InvalidCondition(other)),
                    })
                    .collect::<Result<_, _>>()?,
                groups: groups
                    .split(',')
                    .map(parse_with_context)
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(records))
    }
}

fn total_arrangements<'a>(records: impl Iterator<Item = &'a Record>) -> DynamicResult<u64> {
    let counts = records
        .map(Record::arrangements)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(counts
        .into_iter()
        .checked_sum()
        .ok_or(SpringError::Overflow)?)
}

/*
For part 1, sum the count of arrangements of each row.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = ConditionRecords;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_arrangements(input.0.iter())
    }
}

/*
For part 2, the records were folded. Unfold each by repeating its springs five times, joined by `?`,
and its group sizes five times. Sum the arrangements of the unfolded rows.
*/

impl Solution<PartTwo> for Day12 {
    type Input = ConditionRecords;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let unfolded: Vec<_> = input.0.iter().map(Record::unfolded).collect();
        total_arrangements(unfolded.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = ConditionRecords::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day12 as Solution<PartOne>>::solve(&parsed)?, 21);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = ConditionRecords::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day12 as Solution<PartTwo>>::solve(&parsed)?, 525_152);
        Ok(())
    }

    #[test]
    fn arrangements_per_row() -> DynamicResult<()> {
        let parsed = ConditionRecords::parse(EXAMPLE_INPUT)?;
        let counts = parsed
            .0
            .iter()
            .map(Record::arrangements)
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        Ok(())
    }
}
