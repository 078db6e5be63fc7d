use aoc_framework::parsing::{Separator, parse_separated_values};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "2024 Day 2: Red-Nosed Reports",
    parsed = Reports,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2024<2> {}

/*
Input is one report per line, each a whitespace separated list of levels.
*/

struct Reports(Vec<Vec<u32>>);

impl ParseData for Reports {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(parse_separated_values(input, Separator::Whitespace)?))
    }
}

/*
A report is safe when its levels are all increasing or all decreasing, and any two adjacent levels
differ by at least one and at most three.

For part 1, count the safe reports.
*/

/// Determine if levels are strictly monotonic with gentle steps.
fn is_safe<'a>(levels: impl IntoIterator<Item = &'a u32>) -> bool {
    let mut direction = None;
    let mut previous: Option<u32> = None;
    for &level in levels {
        if let Some(previous) = previous {
            if !(1..=3).contains(&level.abs_diff(previous)) {
                return false;
            }
            let increasing = level > previous;
            if *direction.get_or_insert(increasing) != increasing {
                return false;
            }
        }
        previous = Some(level);
    }
    true
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|report| is_safe(report.iter())).count())
    }
}

/*
The Problem Dampener tolerates a single bad level: a report also counts as safe if removing any one
of its levels makes it safe.

For part 2, count the safe reports with the Problem Dampener.
*/

fn is_safe_dampened(report: &[u32]) -> bool {
    is_safe(report)
        || (0..report.len()).any(|skipped| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| index != skipped)
                    .map(|(_, level)| level),
            )
        })
}

impl Solution<PartTwo> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Reports::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Reports::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn dampener_can_drop_the_first_level() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
    }
}
