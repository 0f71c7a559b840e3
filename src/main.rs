#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::suboptimal_flops,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use clap::{ArgAction, Parser};
use puzzle_kit::PartKind;
use puzzle_kit::input::{default_input_path, read_input};
use puzzle_kit::runner::{OutputHandler, RunSettings};
use tracing::level_filters::LevelFilter;

mod checked_product;
mod solutions;

use solutions::PuzzleDay;

/// Advent of Code puzzle solver, covering several yearly editions.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The edition (year) of the puzzle, e.g. 2022.
    edition: u16,

    /// The puzzle to run, e.g. "day-05" or 5.
    puzzle: String,

    /// Sets an alternative input file to use over the default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory holding default inputs, as `<DIR>/<edition>/day-NN.txt`.
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    inputs_dir: PathBuf,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Skip checking answers against the answers recorded for the default inputs.
    #[arg(long, action = ArgAction::SetTrue)]
    no_verify: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Recorded answers only hold for the default input files.
    fn should_verify(&self) -> bool {
        !self.no_verify && self.input.is_none()
    }
}

/// Install the log subscriber, writing to standard error so answers stay on standard output.
fn enable_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

struct CliOutputHandler {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    /// Format an optional duration, filtering out durations shorter than the minimum.
    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn puzzle_title(&mut self, title: &str) {
        println!("= {title} =");
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{output} ({formatted_duration})");
        } else {
            println!("{output}");
        }
    }

    fn answer_verified(&mut self, part: PartKind) {
        tracing::debug!(%part, "answer matches the recorded answer");
    }
}

/// Find and run the puzzle named on the command line.
///
/// An unknown puzzle is logged and skipped without failing.
fn run_requested(args: &Cli, handler: &mut dyn OutputHandler) -> Result<()> {
    let found = args
        .puzzle
        .parse::<PuzzleDay>()
        .map_err(Error::from)
        .and_then(|day| {
            let runner = solutions::find_puzzle(args.edition, day)?;
            Ok((day, runner))
        });
    let (day, run) = match found {
        Ok(found) => found,
        Err(error) => {
            tracing::error!("couldn't find anything for {}: {error}", args.puzzle);
            return Ok(());
        }
    };

    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| default_input_path(&args.inputs_dir, args.edition, day.number()));
    let input_str = read_input(&input_path);

    let settings = RunSettings {
        timed: args.timed,
        verify: args.should_verify(),
    };
    run(&input_str, handler, settings).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context(format!("failed to run {day} of edition {}", args.edition))
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();
    enable_tracing(args.verbose);

    println!("Advent of Code {} - {}", args.edition, args.puzzle);
    println!("{}", "=".repeat(64));

    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    run_requested(&args, &mut handler)?;

    println!();
    println!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn puzzle_title(&mut self, title: &str) {
            self.events.push(format!("title {title}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_owned());
        }

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {
            self.events.push("parse end".to_owned());
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.events.push(format!("{part}: {output}"));
        }
    }

    #[test]
    fn unknown_puzzles_are_skipped_without_error() -> Result<()> {
        for puzzle in ["day-99", "tomorrow"] {
            let args = Cli::try_parse_from(["advent", "2023", puzzle])?;
            let mut handler = RecordingHandler::default();
            run_requested(&args, &mut handler)?;
            assert!(handler.events.is_empty());
        }
        let args = Cli::try_parse_from(["advent", "1999", "day-01"])?;
        let mut handler = RecordingHandler::default();
        run_requested(&args, &mut handler)?;
        assert!(handler.events.is_empty());
        Ok(())
    }
}
