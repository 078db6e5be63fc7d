use std::collections::HashMap;

use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 11: Plutonian Pebbles",
    parsed = Stones,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2024<11> {}

/*
Input is a single line of numbers engraved on stones, separated by spaces.
*/

struct Stones(Vec<u64>);

impl ParseData for Stones {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let stones = input
            .split_whitespace()
            .map(parse_with_context)
            .collect::<Result<Vec<u64>, _>>()?;
        Ok(Self(stones))
    }
}

/*
Every time you blink, each stone changes by the first rule that applies:

- a stone engraved with 0 becomes a stone engraved with 1;
- a stone with an even number of digits splits into two stones, the left half of the digits on one
  and the right half on the other (without leading zeros);
- otherwise, the stone's number is multiplied by 2024.

Order is preserved but never matters to the count, so stones are tallied by their number.

For part 1, count the stones after blinking 25 times.
*/

#[derive(thiserror::Error, Debug)]
#[error("stone engraved with {0} grew too large to engrave")]
struct StoneOverflow(u64);

/// The stones a single stone becomes after one blink.
fn blink(stone: u64) -> Result<(u64, Option<u64>), StoneOverflow> {
    if stone == 0 {
        return Ok((1, None));
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let divisor = 10u64.pow(digits / 2);
        return Ok((stone / divisor, Some(stone % divisor)));
    }
    stone
        .checked_mul(2024)
        .map(|multiplied| (multiplied, None))
        .ok_or(StoneOverflow(stone))
}

fn count_after_blinks(stones: &[u64], blinks: usize) -> DynamicResult<u64> {
    let mut tally: HashMap<u64, u64> = HashMap::new();
    for &stone in stones {
        *tally.entry(stone).or_default() += 1;
    }

    for _ in 0..blinks {
        let mut next: HashMap<u64, u64> = HashMap::with_capacity(tally.len());
        for (stone, count) in tally {
            let (left, right_opt) = blink(stone)?;
            *next.entry(left).or_default() += count;
            if let Some(right) = right_opt {
                *next.entry(right).or_default() += count;
            }
        }
        tally = next;
    }

    tally
        .into_values()
        .checked_sum()
        .ok_or_else(|| "stone count overflowed".into())
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        count_after_blinks(&input.0, 25)
    }
}

/*
For part 2, count the stones after blinking 75 times.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        count_after_blinks(&input.0, 75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"125 17
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 55312);
        Ok(())
    }

    #[test]
    fn six_blinks_of_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        assert_eq!(count_after_blinks(&parsed.0, 6)?, 22);
        Ok(())
    }

    #[test]
    fn blink_rules() -> DynamicResult<()> {
        assert_eq!(blink(0)?, (1, None));
        assert_eq!(blink(1000)?, (10, Some(0)));
        assert_eq!(blink(99)?, (9, Some(9)));
        assert_eq!(blink(1)?, (2024, None));
        Ok(())
    }
}
