//! Traits and utilities for solving daily puzzles.
//!
//! A puzzle is solved in up to two parts. Each part is a type implementing [`Solution`] for a
//! [`Part`] marker, and may share a parsed input type implementing [`ParseData`].
//!
//! # Quick Start
//!
//! 1. Define an input type and implement [`ParseData`]:
//!
//! ```
//! # use puzzle_kit::{DynamicResult, ParseData};
//! #
//! struct Depths(Vec<u32>);
//!
//! impl ParseData for Depths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let depths = input
//!             .lines()
//!             .map(str::parse)
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(depths))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for a part:
//!
//! ```
//! # use puzzle_kit::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Depths(Vec<u32>);
//! # impl ParseData for Depths {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(input.lines().map(str::parse).collect::<Result<_, _>>()?))
//! #     }
//! # }
//! #
//! struct SonarSweep;
//!
//! impl Solution<PartOne> for SonarSweep {
//!     type Input = Depths;
//!     type Output = usize;
//!
//!     fn solve(input: &Depths) -> DynamicResult<usize> {
//!         Ok(input.0.windows(2).filter(|pair| pair[1] > pair[0]).count())
//!     }
//! }
//! ```
//!
//! 3. Register the puzzle with the [`runner`] module's attribute macro to run it.
//!
//! # Solving raw input
//!
//! Setting [`Solution::Input`] to `str` skips the parse step:
//!
//! ```
//! use puzzle_kit::{DynamicResult, PartOne, Solution};
//!
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod input;
pub mod parsing;
pub mod runner;

mod private {
    /// Restricts implementations of [`Part`][super::Part] to the markers in this crate.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies one of the two parts of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait identifying which part a [`Solution`] solves.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution to one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// The input passed to [`Solution::solve`] by reference.
    ///
    /// Set to `str` to solve the raw input text.
    type Input: ?Sized;

    /// The answer type. Answers are compared to recorded answers by their displayed form.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a failed computation is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure created by parsing puzzle input.
///
/// Solutions receive parsed data by setting [`Solution::Input`] to the implementing type.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
