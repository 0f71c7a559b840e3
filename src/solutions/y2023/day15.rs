use checked_sum::CheckedSum;
use puzzle_kit::parsing::parse_with_context;
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 15: Lens Library",
    parsed = InitializationSequence,
    part_one = Day15,
    part_two = Day15,
    answer_one = "505427",
    answer_two = "243747"
)]
impl super::AdventOfCode2023<15> {}

#[derive(thiserror::Error, Debug)]
enum LensError {
    #[error("expected a step like \"rn=1\" or \"cm-\", found {0:?}")]
    InvalidStep(String),

    #[error("sum overflowed")]
    Overflow,
}

/*
Input is an initialization sequence: steps separated by commas, with newlines ignored.

The HASH algorithm turns a string into a number from 0 to 255. Starting from zero, for each
character add its ASCII code, multiply by 17, and keep the remainder after dividing by 256.
*/

fn hash(text: &str) -> u8 {
    text.bytes()
        .fold(0u8, |value, byte| value.wrapping_add(byte).wrapping_mul(17))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone)]
struct Step {
    text: String,
    label: String,
    operation: Operation,
}

struct InitializationSequence(Vec<Step>);

impl ParseData for InitializationSequence {
    fn parse(input: &str) -> DynamicResult<Self> {
        let joined: String = input.lines().collect();
        let steps = joined
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(|step| -> DynamicResult<_> {
                let (label, operation) = if let Some(label) = step.strip_suffix('-') {
                    (label, Operation::Remove)
                } else if let Some((label, focal_length)) = step.split_once('=') {
                    (label, Operation::Insert(parse_with_context(focal_length)?))
                } else {
                    return Err(LensError::InvalidStep(step.to_owned()).into());
                };
                Ok(Step {
                    text: step.to_owned(),
                    label: label.to_owned(),
                    operation,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(steps))
    }
}

/*
For part 1, sum the HASH of every step.
*/

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = InitializationSequence;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .map(|step| u32::from(hash(&step.text)))
            .checked_sum()
            .ok_or(LensError::Overflow)?)
    }
}

/*
For part 2, there are 256 boxes of lenses, and the HASH of a step's label picks its box.

- `label-` removes the lens with that label from its box, if present.
- `label=N` puts a lens of focal length `N` in the box. A lens with the same label is replaced in
  place. Otherwise the new lens goes behind any lenses already in the box.

A lens's focusing power is its box number plus one, times its slot in the box counting from one,
times its focal length. Sum the focusing power of every lens after all steps.
*/

type LensBox = Vec<(String, u8)>;

impl Solution<PartTwo> for Day15 {
    type Input = InitializationSequence;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut boxes: Vec<LensBox> = vec![Vec::new(); 256];
        for step in &input.0 {
            let lenses = &mut boxes[usize::from(hash(&step.label))];
            let slot = lenses.iter().position(|(label, _)| *label == step.label);
            match (&step.operation, slot) {
                (Operation::Remove, Some(slot)) => {
                    lenses.remove(slot);
                }
                (Operation::Remove, None) => {}
                (&Operation::Insert(focal_length), Some(slot)) => lenses[slot].1 = focal_length,
                (&Operation::Insert(focal_length), None) => {
                    lenses.push((step.label.clone(), focal_length));
                }
            }
        }

        Ok(boxes
            .iter()
            .zip(1..)
            .flat_map(|(lenses, box_number)| {
                lenses
                    .iter()
                    .zip(1..)
                    .map(move |(&(_, focal_length), slot)| {
                        box_number * slot * usize::from(focal_length)
                    })
            })
            .checked_sum()
            .ok_or(LensError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = InitializationSequence::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day15 as Solution<PartOne>>::solve(&parsed)?, 1320);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = InitializationSequence::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day15 as Solution<PartTwo>>::solve(&parsed)?, 145);
        Ok(())
    }

    #[test]
    fn hash_of_hash() {
        assert_eq!(hash("HASH"), 52);
    }

    #[test]
    fn newlines_are_ignored() -> DynamicResult<()> {
        let parsed = InitializationSequence::parse("rn=1,c\nm-\n")?;
        assert_eq!(parsed.0[1].label, "cm");
        Ok(())
    }
}
