use puzzle_kit::parsing::{parse_with_context, split_blocks};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

use crate::checked_product::CheckedProduct;

#[puzzle_runner(
    title = "Day 11: Monkey in the Middle",
    parsed = Troop,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2022<11> {}

#[derive(thiserror::Error, Debug)]
enum MonkeyError {
    #[error("monkey block {block} is missing the {field:?} line")]
    MissingLine { block: usize, field: &'static str },

    #[error("unexpected line in monkey block {block}: {line:?}")]
    UnexpectedLine { block: usize, line: String },

    #[error("monkey {monkey} throws to unknown monkey {target}")]
    UnknownTarget { monkey: usize, target: usize },

    #[error("monkey {0} can't test divisibility by zero")]
    ZeroDivisor(usize),

    #[error("monkeys must be listed in order, expected monkey {expected} but found {found}")]
    OutOfOrder { expected: usize, found: usize },

    #[error("worry level overflowed")]
    Overflow,

    #[error("need at least two monkeys to measure monkey business")]
    TooFewMonkeys,
}

/*
Input describes monkeys holding items, one block per monkey separated by blank lines:

```text
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3
```

Each item is a worry level. In a round, each monkey in order inspects each of its items: the
operation updates the worry level, relief may lower it, then the item is thrown to a monkey based on
whether the worry level is divisible by the test divisor.
*/

type Worry = u64;

#[derive(Debug, Clone, Copy)]
enum Operand {
    Old,
    Value(Worry),
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(Operand),
    Subtract(Operand),
    Multiply(Operand),
}

impl Operation {
    fn apply(self, old: Worry) -> Result<Worry, MonkeyError> {
        let value = |operand: Operand| match operand {
            Operand::Old => old,
            Operand::Value(value) => value,
        };
        let new = match self {
            Self::Add(operand) => old.checked_add(value(operand)),
            Self::Subtract(operand) => old.checked_sub(value(operand)),
            Self::Multiply(operand) => old.checked_mul(value(operand)),
        };
        new.ok_or(MonkeyError::Overflow)
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<Worry>,
    operation: Operation,
    divisor: Worry,
    target_if_divisible: usize,
    target_otherwise: usize,
}

#[derive(Debug, Clone)]
struct Troop(Vec<Monkey>);

struct MonkeyParser {
    header_re: Regex,
    operation_re: Regex,
}

impl MonkeyParser {
    fn new() -> Self {
        Self {
            header_re: Regex::new(r"^Monkey (\d+):$").expect("pattern should be valid"),
            operation_re: Regex::new(r"^Operation: new = old ([-+*]) (old|\d+)$")
                .expect("pattern should be valid"),
        }
    }

    fn parse(&self, block_index: usize, text: &str) -> DynamicResult<Monkey> {
        let mut lines = text.lines().map(str::trim);
        let mut next_line = |field: &'static str, prefix: &str| -> DynamicResult<String> {
            let line = lines.next().ok_or(MonkeyError::MissingLine {
                block: block_index,
                field,
            })?;
            let rest = line
                .strip_prefix(prefix)
                .ok_or_else(|| MonkeyError::UnexpectedLine {
                    block: block_index,
                    line: line.to_owned(),
                })?;
            Ok(rest.to_owned())
        };

        let header = next_line("Monkey", "")?;
        let captures = self
            .header_re
            .captures(&header)
            .ok_or_else(|| MonkeyError::UnexpectedLine {
                block: block_index,
                line: header.clone(),
            })?;
        let id: usize = parse_with_context(&captures[1])?;
        if id != block_index {
            return Err(MonkeyError::OutOfOrder {
                expected: block_index,
                found: id,
            }
            .into());
        }

        let items_line = next_line("Starting items", "Starting items:")?;
        let items = items_line
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_with_context)
            .collect::<Result<_, _>>()?;

        let operation_line = next_line("Operation", "")?;
        let captures = self
            .operation_re
            .captures(&operation_line)
            .ok_or_else(|| MonkeyError::UnexpectedLine {
                block: block_index,
                line: operation_line.clone(),
            })?;
        let operand = match &captures[2] {
            "old" => Operand::Old,
            value => Operand::Value(parse_with_context(value)?),
        };
        let operation = match &captures[1] {
            "+" => Operation::Add(operand),
            "-" => Operation::Subtract(operand),
            _ => Operation::Multiply(operand),
        };

        let divisor: Worry = parse_with_context(&next_line("Test", "Test: divisible by ")?)?;
        if divisor == 0 {
            return Err(MonkeyError::ZeroDivisor(id).into());
        }
        let target_if_divisible =
            parse_with_context(&next_line("If true", "If true: throw to monkey ")?)?;
        let target_otherwise =
            parse_with_context(&next_line("If false", "If false: throw to monkey ")?)?;

        Ok(Monkey {
            items,
            operation,
            divisor,
            target_if_divisible,
            target_otherwise,
        })
    }
}

impl ParseData for Troop {
    fn parse(input: &str) -> DynamicResult<Self> {
        let parser = MonkeyParser::new();
        let monkeys: Vec<Monkey> = split_blocks(input)
            .enumerate()
            .map(|(index, block)| parser.parse(index, block.text))
            .collect::<Result<_, _>>()?;

        for (index, monkey) in monkeys.iter().enumerate() {
            for target in [monkey.target_if_divisible, monkey.target_otherwise] {
                if target >= monkeys.len() || target == index {
                    return Err(MonkeyError::UnknownTarget {
                        monkey: index,
                        target,
                    }
                    .into());
                }
            }
        }
        Ok(Self(monkeys))
    }
}

/// How worry levels are kept in check after each inspection.
#[derive(Debug, Clone, Copy)]
enum Relief {
    /// Worry is divided by three, rounding down.
    DivideByThree,
    /// Worry is kept modulo a common multiple of every divisor, which leaves divisibility tests
    /// unchanged.
    Modulo(Worry),
}

impl Troop {
    /// Play rounds of keep away, returning how many items each monkey inspected.
    fn play(&self, rounds: usize, relief: Relief) -> Result<Vec<u64>, MonkeyError> {
        let mut monkeys = self.0.clone();
        let mut inspections = vec![0; monkeys.len()];

        for round in 1..=rounds {
            for index in 0..monkeys.len() {
                let items = std::mem::take(&mut monkeys[index].items);
                let Monkey {
                    operation,
                    divisor,
                    target_if_divisible,
                    target_otherwise,
                    ..
                } = monkeys[index];
                inspections[index] += items.len() as u64;

                for item in items {
                    let inspected = operation.apply(item)?;
                    let worry = match relief {
                        Relief::DivideByThree => inspected / 3,
                        Relief::Modulo(modulus) => inspected % modulus,
                    };
                    let target = if worry % divisor == 0 {
                        target_if_divisible
                    } else {
                        target_otherwise
                    };
                    tracing::trace!(
                        monkey = index,
                        item,
                        inspected,
                        worry,
                        target,
                        "item thrown"
                    );
                    monkeys[target].items.push(worry);
                }
            }
            tracing::trace!(round, ?inspections, "round finished");
        }
        Ok(inspections)
    }
}

/// The product of the two highest inspection counts.
fn monkey_business(mut inspections: Vec<u64>) -> Result<u64, MonkeyError> {
    if inspections.len() < 2 {
        return Err(MonkeyError::TooFewMonkeys);
    }
    inspections.sort_unstable_by(|a, b| b.cmp(a));
    inspections
        .into_iter()
        .take(2)
        .checked_product()
        .ok_or(MonkeyError::Overflow)
}

/*
For part 1, after each inspection the worry level is divided by three, rounding down. Find the
monkey business after 20 rounds.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Troop;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let inspections = input.play(20, Relief::DivideByThree)?;
        Ok(monkey_business(inspections)?)
    }
}

/*
For part 2, worry levels are no longer divided by three, and 10000 rounds are played. Worry levels
would grow without bound, so they are kept modulo the product of every monkey's divisor.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Troop;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let modulus = input
            .0
            .iter()
            .map(|monkey| monkey.divisor)
            .checked_product()
            .ok_or(MonkeyError::Overflow)?;
        let inspections = input.play(10_000, Relief::Modulo(modulus))?;
        Ok(monkey_business(inspections)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day11 as Solution<PartOne>>::solve(&parsed)?, 10605);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        assert_eq!(
            <Day11 as Solution<PartTwo>>::solve(&parsed)?,
            2_713_310_158
        );
        Ok(())
    }

    #[test]
    fn inspections_after_one_round_without_relief() -> DynamicResult<()> {
        let parsed = Troop::parse(EXAMPLE_INPUT)?;
        let modulus = 23 * 19 * 13 * 17;
        assert_eq!(parsed.play(1, Relief::Modulo(modulus))?, vec![2, 4, 3, 6]);
        Ok(())
    }
}
