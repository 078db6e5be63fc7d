//! Framework of traits and utilities for solving Advent of Code puzzles across event years.
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! #
//! struct Reports(Vec<Vec<u8>>);
//!
//! impl ParseData for Reports {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let rows = input
//!             .lines()
//!             .map(|line| line.split_whitespace().map(str::parse).collect())
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(rows))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for your part:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Reports(Vec<Vec<u8>>);
//! # impl ParseData for Reports {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(Vec::new()))
//! #     }
//! # }
//! #
//! struct Day02;
//!
//! impl Solution<PartOne> for Day02 {
//!     type Input = Reports;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(input.0.iter().filter(|report| report.is_sorted()).count())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute your solution.
//!
//! # Examples
//!
//! ## Solution with `Input = str`
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct Day03;
//!
//! impl Solution<PartOne> for Day03 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.matches("mul(").count())
//!     }
//! }
//! ```
//!
//! ## Identifying a puzzle
//!
//! ```
//! use aoc_framework::PuzzleDate;
//!
//! let date = PuzzleDate::new(2024, 6)?;
//! assert_eq!(date.to_string(), "2024 day 6");
//! assert!(PuzzleDate::new(2024, 26).is_err());
//! # Ok::<(), aoc_framework::InvalidPuzzleDate>(())
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
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
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

use thiserror::Error;

pub mod parsing;
pub mod runner;

mod private {
    /// A private sealed trait used to prevent external implementations of public traits.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// The first year Advent of Code ran.
const FIRST_EVENT_YEAR: u16 = 2015;

/// The last puzzle day an event can have.
const LAST_EVENT_DAY: u8 = 25;

/// The date of a puzzle, identified by the event year and the day in December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate {
    year: u16,
    day: u8,
}

/// A year or day that no Advent of Code event could have.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidPuzzleDate {
    #[error("events start in {FIRST_EVENT_YEAR}, found year {0}")]
    YearBeforeFirstEvent(u16),

    #[error("puzzle days range from 1 to {LAST_EVENT_DAY}, found day {0}")]
    DayOutOfRange(u8),
}

impl PuzzleDate {
    /// Create a puzzle date.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzleDate`] if the year predates the first event or the day is outside
    /// `1..=25`.
    pub fn new(year: u16, day: u8) -> Result<Self, InvalidPuzzleDate> {
        if year < FIRST_EVENT_YEAR {
            return Err(InvalidPuzzleDate::YearBeforeFirstEvent(year));
        }
        if !(1..=LAST_EVENT_DAY).contains(&day) {
            return Err(InvalidPuzzleDate::DayOutOfRange(day));
        }
        Ok(Self { year, day })
    }

    /// The event year.
    #[must_use]
    pub fn year(self) -> u16 {
        self.year
    }

    /// The day in December, one based.
    #[must_use]
    pub fn day(self) -> u8 {
        self.day
    }
}

impl Display for PuzzleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A generic trait for a solution that solves for a [`Part`].
///
/// It is expected solutions implement for the marker structs [`PartOne`] or [`PartTwo`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// A solution can encounter varying errors while solving, like invalid input or a logical
    /// error. It is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A trait for data structures that are created by parsing string input.
///
/// Solutions can be passed parsed data constructed through this trait by setting
/// [`Solution::Input`] to the implementing struct.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_date_accepts_event_days() {
        assert!(PuzzleDate::new(2024, 1).is_ok());
        assert!(PuzzleDate::new(2025, 25).is_ok());
    }

    #[test]
    fn puzzle_date_rejects_out_of_range() {
        assert_eq!(
            PuzzleDate::new(2014, 1),
            Err(InvalidPuzzleDate::YearBeforeFirstEvent(2014))
        );
        assert_eq!(
            PuzzleDate::new(2024, 0),
            Err(InvalidPuzzleDate::DayOutOfRange(0))
        );
    }
}
