use std::collections::HashMap;

use puzzle_kit::parsing::{parse_lines_with_offset, split_two_sections};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[puzzle_runner(
    title = "Day 8: Haunted Wasteland",
    parsed = Network,
    part_one = Day08,
    part_two = Day08,
    answer_two = "13830919117339"
)]
impl super::AdventOfCode2023<8> {}

#[derive(thiserror::Error, Debug)]
enum NetworkError {
    #[error("unexpected instruction {0:?}, expected 'L' or 'R'")]
    InvalidInstruction(char),

    #[error("expected a node like \"AAA = (BBB, CCC)\", found {0:?}")]
    InvalidNode(String),

    #[error("node {0:?} is defined twice")]
    DuplicateNode(String),

    #[error("node {0:?} is referenced but never defined")]
    UndefinedNode(String),

    #[error("no path from {0:?} reaches an end node")]
    NeverArrives(String),

    #[error("step count overflowed")]
    Overflow,
}

/*
Input is a map of a network. The first line is a list of left/right instructions, and the rest
defines nodes and where a left or right step leads from each:

```text
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
```

Instructions repeat from the start when they run out.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

struct Network {
    instructions: Vec<Turn>,
    names: Vec<String>,
    /// Left and right destinations of each node, by index into `names`.
    links: Vec<(usize, usize)>,
}

impl ParseData for Network {
    fn parse(input: &str) -> DynamicResult<Self> {
        let (instructions, node_blocks) = split_two_sections(input, "instructions", "nodes")?;
        let instructions = instructions
            .text
            .trim()
            .chars()
            .map(|instruction| match instruction {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                other => Err(NetworkError::InvalidInstruction(other)),
            })
            .collect::<Result<_, _>>()?;

        let node_re =
            Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").expect("pattern should be valid");
        let mut definitions = Vec::new();
        for block in node_blocks {
            let block_definitions =
                parse_lines_with_offset(block.text, block.line_offset, |_, line| {
                    let line = line.trim();
                    let (_, [name, left, right]) = node_re
                        .captures(line)
                        .ok_or_else(|| NetworkError::InvalidNode(line.to_owned()))?
                        .extract();
                    Ok::<_, NetworkError>((name, left, right))
                });
            for definition in block_definitions {
                definitions.push(definition?);
            }
        }

        let mut indexes = HashMap::new();
        for (index, &(name, _, _)) in definitions.iter().enumerate() {
            if indexes.insert(name, index).is_some() {
                return Err(NetworkError::DuplicateNode(name.to_owned()).into());
            }
        }
        let lookup = |name: &str| {
            indexes
                .get(name)
                .copied()
                .ok_or_else(|| NetworkError::UndefinedNode(name.to_owned()))
        };

        Ok(Self {
            instructions,
            names: definitions
                .iter()
                .map(|&(name, _, _)| name.to_owned())
                .collect(),
            links: definitions
                .iter()
                .map(|&(_, left, right)| -> Result<_, NetworkError> {
                    Ok((lookup(left)?, lookup(right)?))
                })
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Network {
    fn index_of(&self, name: &str) -> Result<usize, NetworkError> {
        self.names
            .iter()
            .position(|node| node == name)
            .ok_or_else(|| NetworkError::UndefinedNode(name.to_owned()))
    }

    /// Count steps following the instructions from `start` until reaching a node matching
    /// `is_end`. At least one step is taken.
    fn steps(&self, start: usize, is_end: impl Fn(&str) -> bool) -> Result<u64, NetworkError> {
        // past this many steps a (node, instruction) state has repeated without arriving
        let limit = self.names.len().saturating_mul(self.instructions.len());
        let mut node = start;
        for (step, turn) in self.instructions.iter().cycle().take(limit).enumerate() {
            let (left, right) = self.links[node];
            node = match turn {
                Turn::Left => left,
                Turn::Right => right,
            };
            if is_end(&self.names[node]) {
                return u64::try_from(step + 1).map_err(|_| NetworkError::Overflow);
            }
        }
        Err(NetworkError::NeverArrives(self.names[start].clone()))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

/*
For part 1, count the steps from `AAA` to `ZZZ`.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Network;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let start = input.index_of("AAA")?;
        Ok(input.steps(start, |name| name == "ZZZ")?)
    }
}

/*
For part 2, start on every node ending in `A` at once, stepping all of them together. Count the steps
until every one is on a node ending in `Z`.

Each start's path reaches its end node after some number of steps and then returns to it in loops of
the same length, so all paths first line up at the least common multiple of those counts.
*/

impl Solution<PartTwo> for Day08 {
    type Input = Network;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut total = 1;
        for (start, name) in input.names.iter().enumerate() {
            if !name.ends_with('A') {
                continue;
            }
            let steps = input.steps(start, |name| name.ends_with('Z'))?;
            tracing::debug!(start = %name, steps, "found cycle");
            total = lcm(total, steps).ok_or(NetworkError::Overflow)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const REPEATING_EXAMPLE_INPUT: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const GHOST_EXAMPLE_INPUT: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day08 as Solution<PartOne>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn part_one_repeats_instructions() -> DynamicResult<()> {
        let parsed = Network::parse(REPEATING_EXAMPLE_INPUT)?;
        assert_eq!(<Day08 as Solution<PartOne>>::solve(&parsed)?, 6);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(GHOST_EXAMPLE_INPUT)?;
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 6);
        Ok(())
    }

    #[test]
    fn unreachable_end_is_an_error() -> DynamicResult<()> {
        let parsed = Network::parse("L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n")?;
        assert!(<Day08 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn undefined_nodes_are_rejected() {
        assert!(Network::parse("L\n\nAAA = (BBB, AAA)\n").is_err());
    }
}
