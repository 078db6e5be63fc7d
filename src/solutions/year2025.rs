//! Solutions for the Advent of Code 2025 event.

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
mod day11;
mod day12;

/// A structure collecting 2025 solutions by day.
///
/// See [`AdventOfCode2024`][super::year2024::AdventOfCode2024] for how a day registers itself.
pub struct AdventOfCode2025<const DAY: u8>;

/// Run a 2025 solution based on the day.
pub(super) fn run_day(
    date: PuzzleDate,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match date.day() {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2025::<1>::run(input, handler, timed),
        2 => AdventOfCode2025::<2>::run(input, handler, timed),
        3 => AdventOfCode2025::<3>::run(input, handler, timed),
        4 => AdventOfCode2025::<4>::run(input, handler, timed),
        5 => AdventOfCode2025::<5>::run(input, handler, timed),
        6 => AdventOfCode2025::<6>::run(input, handler, timed),
        7 => AdventOfCode2025::<7>::run(input, handler, timed),
        8 => AdventOfCode2025::<8>::run(input, handler, timed),
        9 => AdventOfCode2025::<9>::run(input, handler, timed),
        11 => AdventOfCode2025::<11>::run(input, handler, timed),
        12 => AdventOfCode2025::<12>::run(input, handler, timed),
        _ => Err(PuzzleNotAvailable(date).into()),
    }
}
