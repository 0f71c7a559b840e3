use puzzle_kit::parsing::{parse_lines_with_offset, parse_with_context, split_two_sections};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[puzzle_runner(
    title = "Day 5: Supply Stacks",
    parsed = Procedure,
    part_one = Day05,
    part_two = Day05,
    answer_one = "CFFHVVHNC",
    answer_two = "FSZWBPTBG"
)]
impl super::AdventOfCode2022<5> {}

#[derive(thiserror::Error, Debug)]
enum SupplyError {
    #[error("drawing must end with a line of stack numbers")]
    MissingStackNumbers,

    #[error("expected a move like \"move 1 from 2 to 1\", found {0:?}")]
    InvalidMove(String),

    #[error("stack {0} does not exist")]
    UnknownStack(usize),

    #[error("can't take {count} crates from stack {stack} holding {held}")]
    NotEnoughCrates {
        count: usize,
        stack: usize,
        held: usize,
    },
}

/*
Input has two sections separated by a blank line.

The first is a drawing of stacks of crates. Each crate is a letter in brackets, like `[Z]`, and
stacks are columns four characters apart. The last line of the drawing numbers the stacks.

```text
    [D]
[N] [C]
[Z] [M] [P]
 1   2   3
```

The second is a rearrangement procedure, one move per line: `move <count> from <stack> to <stack>`,
with stacks numbered from 1.
*/

type Crate = char;

/// Crate stacks, bottom crate first.
#[derive(Debug, Clone)]
struct Stacks(Vec<Vec<Crate>>);

#[derive(Debug)]
struct Move {
    count: usize,
    /// Zero-based source stack.
    from: usize,
    /// Zero-based destination stack.
    to: usize,
}

struct Procedure {
    stacks: Stacks,
    moves: Vec<Move>,
}

impl Stacks {
    fn parse_drawing(drawing: &str) -> Result<Self, SupplyError> {
        let mut rows: Vec<&str> = drawing.lines().collect();
        let numbers = rows.pop().ok_or(SupplyError::MissingStackNumbers)?;
        let stack_count = numbers.split_whitespace().count();
        if stack_count == 0 {
            return Err(SupplyError::MissingStackNumbers);
        }

        let mut stacks = vec![Vec::new(); stack_count];
        // walk rows from the bottom up so crates push in stacking order
        for row in rows.iter().rev() {
            let row = row.as_bytes();
            for (index, stack) in stacks.iter_mut().enumerate() {
                if let Some(&label) = row.get(1 + index * 4)
                    && label.is_ascii_alphabetic()
                {
                    stack.push(char::from(label));
                }
            }
        }
        Ok(Self(stacks))
    }

    /// Check a move is possible, returning the index where the moved crates start in the source.
    fn split_index(&self, step: &Move) -> Result<usize, SupplyError> {
        let stack_count = self.0.len();
        if step.to >= stack_count {
            return Err(SupplyError::UnknownStack(step.to + 1));
        }
        let source = self
            .0
            .get(step.from)
            .ok_or(SupplyError::UnknownStack(step.from + 1))?;
        source
            .len()
            .checked_sub(step.count)
            .ok_or(SupplyError::NotEnoughCrates {
                count: step.count,
                stack: step.from + 1,
                held: source.len(),
            })
    }

    /// Move crates, either one at a time (reversing their order) or all at once.
    fn apply(&mut self, step: &Move, one_at_a_time: bool) -> Result<(), SupplyError> {
        let split_at = self.split_index(step)?;
        let mut moved = self.0[step.from].split_off(split_at);
        if one_at_a_time {
            moved.reverse();
        }
        self.0[step.to].extend(moved);
        Ok(())
    }

    /// The letters of the top crate of each stack. Empty stacks are skipped.
    fn top_crates(&self) -> String {
        self.0.iter().filter_map(|stack| stack.last()).collect()
    }
}

impl ParseData for Procedure {
    fn parse(input: &str) -> DynamicResult<Self> {
        let (drawing, rest) = split_two_sections(input, "crate drawing", "procedure")?;
        let stacks = Stacks::parse_drawing(drawing.text)?;

        let move_re =
            Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("pattern should be valid");
        let mut moves = Vec::new();
        for block in rest {
            let block_moves = parse_lines_with_offset(
                block.text,
                block.line_offset,
                |_, line| -> DynamicResult<_> {
                    let captures = move_re
                        .captures(line.trim())
                        .ok_or_else(|| SupplyError::InvalidMove(line.to_owned()))?;
                    let [count, from, to] = captures.extract().1;
                    let from: usize = parse_with_context(from)?;
                    let to: usize = parse_with_context(to)?;
                    Ok(Move {
                        count: parse_with_context(count)?,
                        from: from.checked_sub(1).ok_or(SupplyError::UnknownStack(0))?,
                        to: to.checked_sub(1).ok_or(SupplyError::UnknownStack(0))?,
                    })
                },
            );
            for step in block_moves {
                moves.push(step?);
            }
        }

        Ok(Self { stacks, moves })
    }
}

impl Procedure {
    fn rearrange(&self, one_at_a_time: bool) -> Result<String, SupplyError> {
        let mut stacks = self.stacks.clone();
        for step in &self.moves {
            stacks.apply(step, one_at_a_time)?;
        }
        Ok(stacks.top_crates())
    }
}

/*
For part 1, the crane moves crates one at a time, so a multi-crate move reverses their order. Find
the crates on top of each stack after the procedure.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Procedure;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.rearrange(true)?)
    }
}

/*
For part 2, the crane moves multiple crates at once, keeping their order.
*/

impl Solution<PartTwo> for Day05 {
    type Input = Procedure;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.rearrange(false)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // trailing spaces are part of the drawing
    const EXAMPLE_INPUT: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Procedure::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day05 as Solution<PartOne>>::solve(&parsed)?, "CMZ");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Procedure::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day05 as Solution<PartTwo>>::solve(&parsed)?, "MCD");
        Ok(())
    }

    #[test]
    fn moving_too_many_crates_fails() -> DynamicResult<()> {
        let input = "[A]\n 1 \n\nmove 2 from 1 to 1\n";
        let parsed = Procedure::parse(input)?;
        assert!(<Day05 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}
