use std::fmt::{self, Display};

use checked_sum::CheckedSum;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 10: Cathode-Ray Tube",
    parsed = Program,
    part_one = Day10,
    part_two = Day10,
    answer_one = "17380",
    answer_two = RENDERED_ANSWER
)]
impl super::AdventOfCode2022<10> {}

/// The image recorded for part 2, compared against the displayed [`CrtImage`].
const RENDERED_ANSWER: &str = "\
####..##...##..#..#.####.###..####..##..
#....#..#.#..#.#..#....#.#..#.#....#..#.
###..#....#....#..#...#..#..#.###..#....
#....#.##.#....#..#..#...###..#....#....
#....#..#.#..#.#..#.#....#.#..#....#..#.
#.....###..##...##..####.#..#.####..##..";

#[derive(thiserror::Error, Debug)]
enum ProgramError {
    #[error("unknown instruction {0:?}")]
    UnknownInstruction(String),

    #[error("signal strength overflowed")]
    Overflow,
}

/*
Input is a program for a CPU with a single register `X`, starting at 1. Instructions are one per
line:
- `noop` takes one cycle and does nothing.
- `addx V` takes two cycles, then adds `V` to `X`.

The value of `X` during each cycle drives both parts.
*/

type Register = i32;

enum Instruction {
    Noop,
    AddX(Register),
}

struct Program(Vec<Instruction>);

impl ParseData for Program {
    fn parse(input: &str) -> DynamicResult<Self> {
        let instructions = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let line = line.trim();
            if line == "noop" {
                return Ok(Instruction::Noop);
            }
            let value = line
                .strip_prefix("addx ")
                .ok_or_else(|| ProgramError::UnknownInstruction(line.to_owned()))?;
            Ok(Instruction::AddX(parse_with_context(value)?))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

impl Program {
    /// The value of `X` during each cycle, in cycle order starting from cycle 1.
    fn register_during_cycles(&self) -> Vec<Register> {
        let mut x = 1;
        let mut values = Vec::with_capacity(self.0.len() * 2);
        for instruction in &self.0 {
            match instruction {
                Instruction::Noop => values.push(x),
                Instruction::AddX(value) => {
                    values.extend([x, x]);
                    x += value;
                }
            }
        }
        // the register holds its last value after the program ends
        values.push(x);
        values
    }

    /// The value of `X` during a one-based cycle.
    fn register_during(values: &[Register], cycle: usize) -> Register {
        values
            .get(cycle - 1)
            .or(values.last())
            .copied()
            .unwrap_or(1)
    }
}

/*
For part 1, the signal strength during a cycle is the cycle number multiplied by `X`. Sum the signal
strengths during cycles 20, 60, 100, 140, 180 and 220.
*/

const SIGNAL_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Program;
    type Output = Register;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let values = input.register_during_cycles();
        let strengths: Vec<Register> = SIGNAL_CYCLES
            .into_iter()
            .map(|cycle| {
                let cycle_number =
                    Register::try_from(cycle).map_err(|_| ProgramError::Overflow)?;
                Program::register_during(&values, cycle)
                    .checked_mul(cycle_number)
                    .ok_or(ProgramError::Overflow)
            })
            .collect::<Result<_, _>>()?;
        Ok(strengths
            .into_iter()
            .checked_sum()
            .ok_or(ProgramError::Overflow)?)
    }
}

/*
For part 2, `X` is the middle of a sprite three pixels wide. A CRT draws one pixel per cycle, left to
right across 6 rows of 40 pixels. The pixel is lit if the sprite covers the column being drawn.

Read the capital letters drawn on the CRT. The answer is the image itself.
*/

const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;

/// A drawn CRT screen.
struct CrtImage([[bool; CRT_WIDTH]; CRT_HEIGHT]);

impl Display for CrtImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = Program;
    type Output = CrtImage;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let values = input.register_during_cycles();
        let mut pixels = [[false; CRT_WIDTH]; CRT_HEIGHT];

        for (row_index, row) in pixels.iter_mut().enumerate() {
            for (column, pixel) in row.iter_mut().enumerate() {
                let cycle = row_index * CRT_WIDTH + column + 1;
                let sprite = Program::register_during(&values, cycle);
                let column = Register::try_from(column).map_err(|_| ProgramError::Overflow)?;
                *pixel = (sprite - column).abs() <= 1;
            }
        }
        Ok(CrtImage(pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noops(count: usize) -> String {
        "noop\n".repeat(count)
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        // with X fixed at 1 the strength is the sum of the cycle numbers
        let parsed = Program::parse(&noops(220))?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 720);

        let parsed = Program::parse(&format!("addx 4\n{}", noops(218)))?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 3600);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Program::parse(&noops(240))?;
        let image = <Day10 as Solution<PartTwo>>::solve(&parsed)?.to_string();
        let row = format!("###{}", ".".repeat(37));
        assert_eq!(image, vec![row; 6].join("\n"));
        Ok(())
    }

    #[test]
    fn addx_takes_two_cycles() -> DynamicResult<()> {
        let parsed = Program::parse("noop\naddx 3\naddx -5\n")?;
        assert_eq!(parsed.register_during_cycles(), vec![1, 1, 1, 4, 4, -1]);
        Ok(())
    }
}
