use std::collections::HashMap;

use aoc_framework::parsing::{Separator, into_columns, parse_separated_values};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 1: Historian Hysteria",
    parsed = LocationLists,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2024<1> {}

/*
Input is two columns of location IDs, separated by whitespace. Each column is a list compiled by a
different group of historians.
*/

struct LocationLists {
    left: Vec<u32>,
    right: Vec<u32>,
}

#[derive(thiserror::Error, Debug)]
#[error("expected 2 columns of location IDs, but found {0}")]
struct ColumnCountError(usize);

impl ParseData for LocationLists {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = parse_separated_values(input, Separator::Whitespace)?;
        let columns = into_columns(rows)?;
        let Ok([left, right]) = <[Vec<u32>; 2]>::try_from(columns) else {
            let found = input
                .lines()
                .next()
                .map_or(0, |line| line.split_whitespace().count());
            return Err(ColumnCountError(found).into());
        };
        Ok(Self { left, right })
    }
}

/*
For part 1, pair up the smallest ID of each list, then the second smallest, and so on. Sum the
distances between the IDs of every pair.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = LocationLists;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut left = input.left.clone();
        let mut right = input.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        left.into_iter()
            .zip(right)
            .map(|(a, b)| a.abs_diff(b))
            .checked_sum()
            .ok_or_else(|| "total distance overflowed".into())
    }
}

/*
For part 2, calculate a similarity score: add up each ID of the left list multiplied by how often
it appears in the right list.
*/

impl Solution<PartTwo> for Day01 {
    type Input = LocationLists;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut occurrences: HashMap<u32, u64> = HashMap::new();
        for &id in &input.right {
            *occurrences.entry(id).or_default() += 1;
        }

        input
            .left
            .iter()
            .map(|id| {
                u64::from(*id)
                    .checked_mul(occurrences.get(id).copied().unwrap_or(0))
                    .ok_or("similarity overflowed")
            })
            .try_fold(0u64, |total, score| {
                total.checked_add(score?).ok_or("similarity score overflowed")
            })
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 11);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 31);
        Ok(())
    }

    #[test]
    fn parse_rejects_three_columns() {
        assert!(LocationLists::parse("1 2 3\n4 5 6\n").is_err());
    }

    #[test]
    fn parse_rejects_uneven_rows() {
        assert!(LocationLists::parse("1 2\n4\n").is_err());
    }
}
