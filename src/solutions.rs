//! Solutions implemented for Advent of Code, grouped by event year.
//!
//! This module provides [`run_puzzle`] to dynamically run a solution by its [`PuzzleDate`].
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule of the year module (e.g. `year2024/day07.rs`) to hold the implementation.
//! 2. Have the submodule implement the year's registry struct for its day (e.g.
//!    [`AdventOfCode2024<7>`][year2024::AdventOfCode2024]) as a
//!    [`SolutionRunner`][aoc_framework::runner::SolutionRunner].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE` in the year module.
//! 4. Add a match case for the day below `MATCH SOLUTIONS HERE` in the year module:
//!
//! ```ignore
//! // matching for day 7
//! 7 => AdventOfCode2024::<7>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::runner::OutputHandler;
use aoc_framework::{DynamicResult, PuzzleDate};
use thiserror::Error;

mod year2024;
mod year2025;

/// A solution for a puzzle is not available.
#[derive(Error, Debug)]
#[error("no solution available for {0}")]
pub struct PuzzleNotAvailable(PuzzleDate);

/// Run a solution based on the puzzle date.
///
/// # Errors
///
/// If the solution for the given date is not available, a [`PuzzleNotAvailable`] error is
/// returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_puzzle(
    date: PuzzleDate,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match date.year() {
        2024 => year2024::run_day(date, input, handler, timed),
        2025 => year2025::run_day(date, input, handler, timed),
        _ => Err(PuzzleNotAvailable(date).into()),
    }
}
