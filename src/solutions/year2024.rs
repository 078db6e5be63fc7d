//! Solutions for the Advent of Code 2024 event.

use aoc_framework::runner::{OutputHandler, SolutionRunner};
use aoc_framework::{DynamicResult, PuzzleDate};

use super::PuzzleNotAvailable;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;

/// A structure collecting 2024 solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day with
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(name = "2024 Day 1: Historian Hysteria", part_one = Day01)]
/// impl super::AdventOfCode2024<1> {}
/// ```
pub struct AdventOfCode2024<const DAY: u8>;

/// Run a 2024 solution based on the day.
pub(super) fn run_day(
    date: PuzzleDate,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match date.day() {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2024::<1>::run(input, handler, timed),
        2 => AdventOfCode2024::<2>::run(input, handler, timed),
        3 => AdventOfCode2024::<3>::run(input, handler, timed),
        4 => AdventOfCode2024::<4>::run(input, handler, timed),
        5 => AdventOfCode2024::<5>::run(input, handler, timed),
        6 => AdventOfCode2024::<6>::run(input, handler, timed),
        7 => AdventOfCode2024::<7>::run(input, handler, timed),
        8 => AdventOfCode2024::<8>::run(input, handler, timed),
        9 => AdventOfCode2024::<9>::run(input, handler, timed),
        10 => AdventOfCode2024::<10>::run(input, handler, timed),
        11 => AdventOfCode2024::<11>::run(input, handler, timed),
        12 => AdventOfCode2024::<12>::run(input, handler, timed),
        13 => AdventOfCode2024::<13>::run(input, handler, timed),
        _ => Err(PuzzleNotAvailable(date).into()),
    }
}
