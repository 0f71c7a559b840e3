//! Running puzzle solutions and verifying their answers.
//!
//! # Quick Start
//!
//! A struct or impl block can be annotated with the [`#[puzzle_runner]`][puzzle_runner] attribute
//! macro to implement [`PuzzleRunner`]:
//!
//! ```
//! # use puzzle_kit::runner::puzzle_runner;
//! # use puzzle_kit::{DynamicResult, PartOne, Solution};
//! #
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &str) -> DynamicResult<usize> {
//! #        Ok(input.lines().count())
//! #    }
//! }
//!
//! #[puzzle_runner(title = "Line Count", part_one = LineCount, answer_one = "3")]
//! struct LineCountRunner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use puzzle_kit_macros::puzzle_runner;

/// A trait for an output events handler.
///
/// Running a puzzle emits events in order: the title, the optional parse step, then each part's
/// start and output.
pub trait OutputHandler {
    /// Called with the puzzle title before anything else runs.
    fn puzzle_title(&mut self, title: &str);

    /// Called when the puzzle starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished, with the parse duration when timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a part starts solving.
    fn part_start(&mut self, part: PartKind);

    /// Called with a part's answer, and the time taken to solve it when timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);

    /// Called after a part's answer matched its recorded answer.
    fn answer_verified(&mut self, _part: PartKind) {}
}

/// Settings for a single run of a puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Measure parse and part durations.
    pub timed: bool,
    /// Compare answers against [`KnownAnswers`].
    pub verify: bool,
}

/// Answers recorded for a puzzle's input, compared to displayed output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnownAnswers {
    pub part_one: Option<&'static str>,
    pub part_two: Option<&'static str>,
}

impl KnownAnswers {
    /// Get the recorded answer for a part, if any.
    #[must_use]
    pub fn get(&self, part: PartKind) -> Option<&'static str> {
        match part {
            PartKind::One => self.part_one,
            PartKind::Two => self.part_two,
        }
    }
}

/// The identifying information of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The title, e.g. `"Day 5: Supply Stacks"`.
    pub title: &'static str,
    /// The answers recorded for the puzzle's default input.
    pub answers: KnownAnswers,
}

/// A part's answer differs from its recorded answer.
#[derive(Error, Debug)]
#[error("{part} answer {found:?} does not match the recorded answer {expected:?}")]
pub struct AnswerMismatch {
    pub part: PartKind,
    pub expected: &'static str,
    pub found: String,
}

/// Evaluate an expression, returning its result and elapsed [`Duration`].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Evaluate an expression, returning its result and its elapsed duration only if `$timed` is
/// `true`.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Check a part's displayed output against its recorded answer.
///
/// # Errors
///
/// Returns [`AnswerMismatch`] if the answers differ.
fn verify_output(
    part: PartKind,
    output: &dyn Display,
    answers: KnownAnswers,
    handler: &mut dyn OutputHandler,
) -> Result<(), AnswerMismatch> {
    let Some(expected) = answers.get(part) else {
        tracing::debug!(%part, "no recorded answer to verify");
        return Ok(());
    };

    let found = output.to_string();
    if found == expected {
        handler.answer_verified(part);
        Ok(())
    } else {
        Err(AnswerMismatch {
            part,
            expected,
            found,
        })
    }
}

/// Run a puzzle part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated, as is an [`AnswerMismatch`]
/// when verifying.
fn run_part<S, P>(
    input: &S::Input,
    answers: KnownAnswers,
    handler: &mut dyn OutputHandler,
    settings: RunSettings,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    let _span = tracing::debug_span!("solve", %part).entered();

    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), settings.timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);

    if settings.verify {
        verify_output(part, &output, answers, handler)?;
    }
    Ok(())
}

/// Run a puzzle's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    let _span = tracing::debug_span!("parse").entered();

    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a puzzle that only has part one solved, from string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated, as is an [`AnswerMismatch`]
/// when verifying.
pub fn solve_single_part<S1>(
    info: PuzzleInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    settings: RunSettings,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.puzzle_title(info.title);
    run_part::<S1, PartOne>(input, info.answers, handler, settings)
}

/// Run a puzzle with both parts solved from string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated, as is an
/// [`AnswerMismatch`] when verifying. Part two doesn't run if part one fails.
pub fn solve_both_parts<S1, S2>(
    info: PuzzleInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    settings: RunSettings,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.puzzle_title(info.title);
    run_part::<S1, PartOne>(input, info.answers, handler, settings)?;
    run_part::<S2, PartTwo>(input, info.answers, handler, settings)
}

/// Run a puzzle that only has part one solved, parsing the input first.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated, as is an
/// [`AnswerMismatch`] when verifying.
pub fn solve_parsed_single_part<D, S1>(
    info: PuzzleInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    settings: RunSettings,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.puzzle_title(info.title);
    let parsed = run_parse::<D>(input, handler, settings.timed)?;
    run_part::<S1, PartOne>(&parsed, info.answers, handler, settings)
}

/// Run a puzzle with both parts solved, parsing the input once for both.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated, as is an
/// [`AnswerMismatch`] when verifying. Part two doesn't run if part one fails.
pub fn solve_parsed_both_parts<D, S1, S2>(
    info: PuzzleInfo,
    input: &str,
    handler: &mut dyn OutputHandler,
    settings: RunSettings,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.puzzle_title(info.title);
    let parsed = run_parse::<D>(input, handler, settings.timed)?;
    run_part::<S1, PartOne>(&parsed, info.answers, handler, settings)?;
    run_part::<S2, PartTwo>(&parsed, info.answers, handler, settings)
}

/// A puzzle that can be run.
///
/// Implement with the [`puzzle_runner`] attribute macro.
pub trait PuzzleRunner {
    /// Run the puzzle on the given input.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the puzzle is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, settings: RunSettings)
    -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records events as strings, ignoring durations.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
        timed_events: usize,
    }

    impl OutputHandler for RecordingHandler {
        fn puzzle_title(&mut self, title: &str) {
            self.events.push(format!("title {title}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_owned());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.timed_events += usize::from(duration_opt.is_some());
            self.events.push("parse end".to_owned());
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("{part} start"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.timed_events += usize::from(duration_opt.is_some());
            self.events.push(format!("{part} = {output}"));
        }

        fn answer_verified(&mut self, part: PartKind) {
            self.events.push(format!("{part} verified"));
        }
    }

    struct Numbers(Vec<i64>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let numbers = input
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            Ok(Self(numbers))
        }
    }

    struct SumAndProduct;

    impl Solution<PartOne> for SumAndProduct {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for SumAndProduct {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            Ok(input.0.iter().product())
        }
    }

    const INFO: PuzzleInfo = PuzzleInfo {
        title: "Sums",
        answers: KnownAnswers {
            part_one: Some("10"),
            part_two: Some("24"),
        },
    };

    #[test]
    fn parsed_puzzle_emits_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        let settings = RunSettings {
            timed: false,
            verify: true,
        };
        solve_parsed_both_parts::<Numbers, SumAndProduct, SumAndProduct>(
            INFO,
            "1 2 3 4",
            &mut handler,
            settings,
        )?;

        assert_eq!(
            handler.events,
            [
                "title Sums",
                "parse start",
                "parse end",
                "Part 1 start",
                "Part 1 = 10",
                "Part 1 verified",
                "Part 2 start",
                "Part 2 = 24",
                "Part 2 verified",
            ]
        );
        assert_eq!(handler.timed_events, 0);
        Ok(())
    }

    #[test]
    fn mismatched_answer_stops_the_run() {
        let mut handler = RecordingHandler::default();
        let settings = RunSettings {
            timed: true,
            verify: true,
        };
        let result = solve_parsed_both_parts::<Numbers, SumAndProduct, SumAndProduct>(
            INFO,
            "1 2 3 5",
            &mut handler,
            settings,
        );

        let error = result.expect_err("sum of 11 should not match 10");
        let mismatch = error
            .downcast_ref::<AnswerMismatch>()
            .expect("error should be an answer mismatch");
        assert_eq!(mismatch.part, PartKind::One);
        assert_eq!(mismatch.found, "11");
        // part one output is still reported before the mismatch
        assert_eq!(handler.events.last().map(String::as_str), Some("Part 1 = 11"));
        assert_eq!(handler.timed_events, 2);
    }

    #[test]
    fn verification_can_be_disabled() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_both_parts::<Numbers, SumAndProduct, SumAndProduct>(
            INFO,
            "2 2",
            &mut handler,
            RunSettings::default(),
        )?;
        assert!(!handler.events.iter().any(|event| event.ends_with("verified")));
        Ok(())
    }

    struct FirstLine;

    impl Solution<PartOne> for FirstLine {
        type Input = str;
        type Output = String;

        fn solve(input: &str) -> DynamicResult<String> {
            Ok(input.lines().next().unwrap_or_default().to_owned())
        }
    }

    #[test]
    fn unparsed_puzzle_skips_parse_events_and_unrecorded_answers() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        let info = PuzzleInfo {
            title: "First",
            answers: KnownAnswers::default(),
        };
        let settings = RunSettings {
            timed: false,
            verify: true,
        };
        solve_single_part::<FirstLine>(info, "hello\nworld", &mut handler, settings)?;
        assert_eq!(
            handler.events,
            ["title First", "Part 1 start", "Part 1 = hello"]
        );
        Ok(())
    }
}
