//! Functions and traits for running solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro with appropriate properties:
//!
//! ```
//! # use aoc_framework::runner::{solution_runner};
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 1: Historian Hysteria", part_one = Day01)]
//! struct Day01Runner;
//!
//! // or
//!
//! #[solution_runner(name = "Day 1: Historian Hysteria", part_one = Day01)]
//! impl Day01 {}
//! ```
//!
//! Running emits events to an [`OutputHandler`]; [`RecordingHandler`] keeps them in memory:
//!
//! ```
//! # use aoc_framework::runner::{solution_runner, RecordingHandler, SolutionRunner};
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! # struct Day01;
//! # impl Solution<PartOne> for Day01 {
//! #     type Input = str;
//! #     type Output = usize;
//! #     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//! #         Ok(input.lines().count())
//! #     }
//! # }
//! #[solution_runner(name = "Day 1: Historian Hysteria", part_one = Day01)]
//! struct Day01Runner;
//!
//! let mut handler = RecordingHandler::default();
//! Day01Runner::run("3   4\n4   3\n", &mut handler, false)?;
//! assert_eq!(handler.answers(), ["2"]);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```

use std::fmt::Display;
use std::time::Duration;

use tracing::{debug, info_span};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// When a solution runs, the steps of running the solution leads to events to output through a
/// handler as feedback and logging.
pub trait OutputHandler {
    /// Called to output the name of the solution, at the start of running the solution.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is optionally passed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts, with a [`PartKind`] to identify the part.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes to output the result, with a [`PartKind`] to identify the part.
    ///
    /// The duration taken to run the part is optionally passed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// An [`OutputHandler`] that records the solution name and part outputs in memory.
///
/// Useful for checking what a runner produced without printing.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    name: Option<String>,
    outputs: Vec<(PartKind, String)>,
}

impl RecordingHandler {
    /// The recorded solution name, if a solution started.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The displayed outputs of each part, in the order they finished.
    #[must_use]
    pub fn answers(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .map(|(_, output)| output.as_str())
            .collect()
    }

    /// The displayed output of a part, if it finished.
    #[must_use]
    pub fn answer(&self, part: PartKind) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(kind, _)| *kind == part)
            .map(|(_, output)| output.as_str())
    }
}

impl OutputHandler for RecordingHandler {
    fn solution_name(&mut self, name: &str) {
        self.name = Some(name.to_owned());
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

    fn part_start(&mut self, _part: PartKind) {}

    fn part_output(
        &mut self,
        part: PartKind,
        output: &dyn Display,
        _duration_opt: Option<Duration>,
    ) {
        self.outputs.push((part, output.to_string()));
    }
}

/// Measure the duration of an expression.
///
/// The macro evaluates the given expression once and returns a tuple of the expression's result and
/// the elapsed [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Optionally measure the duration of an expression.
///
/// Evaluates to `(result, Some(duration))` when `$timed` is `true`, otherwise `(result, None)`.
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

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result.inspect_err(|error| debug!(%part, %error, "part failed"))?;
    debug!(%part, %output, ?duration_opt, "part solved");
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result.inspect_err(|error| debug!(%error, "parsing failed"))?;
    debug!(input_bytes = input.len(), ?duration_opt, "input parsed");
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a solution that only implements part one and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    let _span = info_span!("solution", name).entered();
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run a solution that implements both parts and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    let _span = info_span!("solution", name).entered();
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a solution that implements part one and has a parse data step for input.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    let _span = info_span!("solution", name).entered();
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a solution that implements both parts and has a parse data step for input.
///
/// The input is parsed once and shared by both parts.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    let _span = info_span!("solution", name).entered();
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A trait for solutions that can be run.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to the
    ///   handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{Separator, parse_separated_values};

    struct Levels(Vec<Vec<u32>>);

    impl ParseData for Levels {
        fn parse(input: &str) -> DynamicResult<Self> {
            Ok(Self(parse_separated_values(input, Separator::Whitespace)?))
        }
    }

    struct CountRows;

    impl Solution<PartOne> for CountRows {
        type Input = Levels;
        type Output = usize;

        fn solve(input: &Self::Input) -> DynamicResult<usize> {
            Ok(input.0.len())
        }
    }

    impl Solution<PartTwo> for CountRows {
        type Input = Levels;
        type Output = u32;

        fn solve(input: &Self::Input) -> DynamicResult<u32> {
            Ok(input.0.iter().flatten().sum())
        }
    }

    #[test]
    fn parsed_full_solution_records_both_parts() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_full_solution::<Levels, CountRows, CountRows>(
            "Rows",
            "1 2\n3 4\n",
            &mut handler,
            true,
        )?;
        assert_eq!(handler.name(), Some("Rows"));
        assert_eq!(handler.answer(PartKind::One), Some("2"));
        assert_eq!(handler.answer(PartKind::Two), Some("10"));
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_parts() {
        let mut handler = RecordingHandler::default();
        let result = solve_parsed_full_solution::<Levels, CountRows, CountRows>(
            "Rows",
            "1 x\n",
            &mut handler,
            false,
        );
        assert!(result.is_err());
        assert!(handler.answers().is_empty());
    }
}
