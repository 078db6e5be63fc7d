use std::ops::RangeInclusive;

use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2025 Day 2: Gift Shop",
    parsed = IdRanges,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2025<2> {}

/*
Input is a single line of product ID ranges separated by commas. Each range is its first and last
ID separated by a dash, e.g. `11-22`.
*/

struct IdRanges(Vec<RangeInclusive<u64>>);

#[derive(thiserror::Error, Debug)]
#[error("ID range is missing '-' separator: {0:?}")]
struct MissingDash(String);

impl ParseData for IdRanges {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(|range| -> DynamicResult<_> {
                let (first, last) = range
                    .split_once('-')
                    .ok_or_else(|| MissingDash(range.to_owned()))?;
                Ok(parse_with_context::<u64>(first)?..=parse_with_context::<u64>(last)?)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(ranges))
    }
}

/// Determine if an ID's digits are a block of `block_len` digits repeated to fill it.
fn is_repetition(digits: &str, block_len: usize) -> bool {
    let len = digits.len();
    block_len > 0
        && block_len < len
        && len % block_len == 0
        && digits
            .as_bytes()
            .chunks(block_len)
            .all(|chunk| chunk == &digits.as_bytes()[..block_len])
}

fn sum_invalid_ids(
    ranges: &[RangeInclusive<u64>],
    is_invalid: fn(&str) -> bool,
) -> DynamicResult<u64> {
    ranges
        .iter()
        .flat_map(RangeInclusive::clone)
        .filter(|id| is_invalid(&id.to_string()))
        .checked_sum()
        .ok_or_else(|| "sum of invalid IDs overflowed".into())
}

/*
An ID is invalid if it is made only of some sequence of digits repeated twice, e.g. `55`, `6464`,
or `123123`. IDs never have leading zeros.

For part 1, add up all of the invalid IDs in the ranges.
*/

fn is_repeated_twice(digits: &str) -> bool {
    digits.len() % 2 == 0 && is_repetition(digits, digits.len() / 2)
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_invalid_ids(&input.0, is_repeated_twice)
    }
}

/*
An ID is actually invalid if it is made only of some sequence of digits repeated at least twice,
e.g. `12341234`, `123123123`, or `1111111`.

For part 2, add up all of the invalid IDs in the ranges under the new rule.
*/

fn is_repeated_at_least_twice(digits: &str) -> bool {
    (1..=digits.len() / 2).any(|block_len| is_repetition(digits, block_len))
}

impl Solution<PartTwo> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_invalid_ids(&input.0, is_repeated_at_least_twice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"11-22,95-115,998-1012,1188511880-1188511890,222220-222224,1698522-1698528,446443-446449,38593856-38593862,565653-565659,824824821-824824827,2121212118-2121212124
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1_227_775_554);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4_174_379_265);
        Ok(())
    }

    #[test]
    fn repeated_blocks() {
        assert!(is_repeated_twice("6464"));
        assert!(!is_repeated_twice("111"));
        assert!(is_repeated_at_least_twice("111"));
        assert!(is_repeated_at_least_twice("123123123"));
        assert!(!is_repeated_at_least_twice("7"));
        assert!(!is_repeated_at_least_twice("1231234"));
    }
}
